//! Input validation for create and update requests.
//!
//! Each function returns every problem found, in a fixed field order, as
//! human-readable messages. An empty list means the input is valid. Strings
//! are checked as given; nothing is trimmed or normalized.

use std::ops::RangeInclusive;

use validator::{Validate, ValidationErrors};

use crate::flower::{CreateFlowerInput, FlowerTexture};
use crate::memory::{CreateMemoryInput, UpdateMemoryInput};
use crate::types::is_canonical_iso;

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

pub const LATITUDE_MESSAGE: &str = "Latitude must be between -90 and 90";
pub const LONGITUDE_MESSAGE: &str = "Longitude must be between -180 and 180";
pub const MEMORY_DATE_MESSAGE: &str = "Memory date must be a valid ISO date string";
pub const TEXTURE_MESSAGE: &str = "Texture must be either flower1 or flower2";

/// Validate a memory create request.
pub fn validate_memory_input(input: &CreateMemoryInput) -> Vec<String> {
    let field_errors = input.validate().err();
    let mut errors = messages_for(field_errors.as_ref(), &["title", "description"]);

    check_coordinates(input.lat, input.lon, &mut errors);
    check_memory_date(input.memory_date.as_deref(), &mut errors);

    errors
}

/// Validate the fields present in a memory update request.
///
/// Expects blank strings to have been dropped already, see
/// [`UpdateMemoryInput::normalized`].
pub fn validate_memory_update(input: &UpdateMemoryInput) -> Vec<String> {
    let field_errors = input.validate().err();
    let mut errors = messages_for(field_errors.as_ref(), &["title", "description"]);

    check_memory_date(input.memory_date.as_deref(), &mut errors);

    errors
}

/// Validate a flower create request.
pub fn validate_flower_input(input: &CreateFlowerInput) -> Vec<String> {
    let field_errors = input.validate().err();
    let mut errors = messages_for(field_errors.as_ref(), &["name"]);

    check_coordinates(input.lat, input.lon, &mut errors);

    let plantable = input
        .texture
        .as_deref()
        .and_then(FlowerTexture::plantable)
        .is_some();
    if !plantable {
        errors.push(TEXTURE_MESSAGE.to_string());
    }

    errors
}

/// Missing coordinates are reported with the same message as out-of-range ones.
fn check_coordinates(lat: Option<f64>, lon: Option<f64>, errors: &mut Vec<String>) {
    if !lat.is_some_and(|lat| LATITUDE_RANGE.contains(&lat)) {
        errors.push(LATITUDE_MESSAGE.to_string());
    }
    if !lon.is_some_and(|lon| LONGITUDE_RANGE.contains(&lon)) {
        errors.push(LONGITUDE_MESSAGE.to_string());
    }
}

/// An absent or empty date is fine; anything else must be canonical ISO.
fn check_memory_date(memory_date: Option<&str>, errors: &mut Vec<String>) {
    match memory_date {
        Some(date) if !date.is_empty() && !is_canonical_iso(date) => {
            errors.push(MEMORY_DATE_MESSAGE.to_string());
        }
        _ => {}
    }
}

/// Flatten derive-generated errors into messages, ordered by `fields`.
fn messages_for(errors: Option<&ValidationErrors>, fields: &[&str]) -> Vec<String> {
    let Some(errors) = errors else {
        return Vec::new();
    };
    let by_field = errors.field_errors();

    fields
        .iter()
        .filter_map(|field| by_field.get(*field))
        .flat_map(|field_errors| field_errors.iter())
        .map(|error| match &error.message {
            Some(message) => message.to_string(),
            None => error.code.to_string(),
        })
        .collect()
}

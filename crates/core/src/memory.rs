//! Memory entity and its request DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{EntityId, IsoTimestamp};
use crate::validation::{validate_memory_input, validate_memory_update};

/// A text note pinned to a location key, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub memory_date: IsoTimestamp,
    pub created_at: IsoTimestamp,
    pub updated_at: IsoTimestamp,
    pub user_id: String,
    pub location_id: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
}

/// Body of `POST /locations/{locationId}/memories` and `POST /memories`.
///
/// Every field is optional at the serde level so that missing fields surface
/// as validation messages rather than deserialization failures.
/// `location_id` is only read by `POST /memories`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemoryInput {
    #[validate(
        required(message = "Title must be between 1 and 200 characters"),
        length(min = 1, max = 200, message = "Title must be between 1 and 200 characters")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Description must be between 1 and 5000 characters"),
        length(min = 1, max = 5000, message = "Description must be between 1 and 5000 characters")
    )]
    pub description: Option<String>,
    pub memory_date: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub location_name: Option<String>,
    pub location_id: Option<String>,
}

impl CreateMemoryInput {
    /// Run every create check, reporting all failures at once.
    pub fn check(&self) -> Result<(), CoreError> {
        let errors = validate_memory_input(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors))
        }
    }

    /// Validate the input and build the memory it describes.
    ///
    /// `memory_date` defaults to `now`, which is also used for both
    /// `created_at` and `updated_at`. The location key is taken as given;
    /// callers check it separately.
    pub fn into_memory(
        self,
        id: EntityId,
        user_id: String,
        location_id: String,
        now: IsoTimestamp,
    ) -> Result<Memory, CoreError> {
        self.check()?;

        let memory_date = self
            .memory_date
            .filter(|date| !date.is_empty())
            .unwrap_or_else(|| now.clone());

        match (self.title, self.description, self.lat, self.lon) {
            (Some(title), Some(description), Some(lat), Some(lon)) => Ok(Memory {
                id,
                title,
                description,
                memory_date,
                created_at: now.clone(),
                updated_at: now,
                user_id,
                location_id,
                lat,
                lon,
                location_name: self.location_name,
            }),
            _ => Err(CoreError::Internal("validated memory input is incomplete".into())),
        }
    }
}

/// Body of `PATCH /memories/{id}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemoryInput {
    #[validate(length(max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: Option<String>,
    #[validate(length(
        max = 5000,
        message = "Description must be between 1 and 5000 characters"
    ))]
    pub description: Option<String>,
    pub memory_date: Option<String>,
}

impl UpdateMemoryInput {
    /// Treat empty strings as absent and validate what remains.
    pub fn normalized(self) -> Result<Self, CoreError> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());
        let input = Self {
            title: non_empty(self.title),
            description: non_empty(self.description),
            memory_date: non_empty(self.memory_date),
        };

        let errors = validate_memory_update(&input);
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }
        Ok(input)
    }
}

//! Location keys, bounding boxes and geohash encoding.
//!
//! A memory's `locationId` is an opaque, geohash-like key. The only structural
//! rule enforced is a minimum length; queries treat it as a plain string.
//! [`encode_geohash`] is a standard base-32 geohash encoder, used to flag
//! location keys that do not match their coordinates.

use crate::error::CoreError;

/// Minimum length of a location key, in characters.
pub const MIN_LOCATION_ID_LEN: usize = 5;

/// Precision used when checking a location key against coordinates.
pub const DEFAULT_GEOHASH_PRECISION: usize = 5;

/// Longest geohash the encoder will produce.
pub const MAX_GEOHASH_PRECISION: usize = 12;

const GEOHASH_ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Reject location keys shorter than [`MIN_LOCATION_ID_LEN`].
pub fn validate_location_id(location_id: &str) -> Result<(), CoreError> {
    if location_id.chars().count() < MIN_LOCATION_ID_LEN {
        return Err(CoreError::InvalidGeohash(format!(
            "Location ID must be at least {MIN_LOCATION_ID_LEN} characters"
        )));
    }
    Ok(())
}

/// Like [`validate_location_id`] for keys that arrive in a request body,
/// where the key may be missing altogether.
pub fn require_location_id(location_id: Option<&str>) -> Result<&str, CoreError> {
    match location_id {
        Some(id) if id.chars().count() >= MIN_LOCATION_ID_LEN => Ok(id),
        _ => Err(CoreError::InvalidGeohash(format!(
            "Location ID is required and must be at least {MIN_LOCATION_ID_LEN} characters"
        ))),
    }
}

/// Rectangular filter region, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

/// Parse a `west,south,east,north` bounding box.
///
/// Exactly four comma-separated finite numbers are required; whitespace
/// around each number is ignored.
pub fn parse_bbox(raw: &str) -> Result<BBox, CoreError> {
    let invalid =
        || CoreError::InvalidBbox("Invalid bbox format. Expected: west,south,east,north".into());

    let parts: Vec<f64> = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;

    match parts.as_slice() {
        &[west, south, east, north] => Ok(BBox {
            west,
            south,
            east,
            north,
        }),
        _ => Err(invalid()),
    }
}

/// Encode a coordinate as a geohash of `precision` characters.
///
/// `precision` is clamped to `1..=`[`MAX_GEOHASH_PRECISION`].
pub fn encode_geohash(lat: f64, lon: f64, precision: usize) -> String {
    let precision = precision.clamp(1, MAX_GEOHASH_PRECISION);
    let mut lat_range = (-90.0_f64, 90.0_f64);
    let mut lon_range = (-180.0_f64, 180.0_f64);

    let mut hash = String::with_capacity(precision);
    let mut even = true;
    let mut bit = 0;
    let mut ch = 0usize;

    while hash.len() < precision {
        let (range, value) = if even {
            (&mut lon_range, lon)
        } else {
            (&mut lat_range, lat)
        };
        let mid = (range.0 + range.1) / 2.0;
        if value >= mid {
            ch |= 1 << (4 - bit);
            range.0 = mid;
        } else {
            range.1 = mid;
        }

        even = !even;
        bit += 1;
        if bit == 5 {
            hash.push(GEOHASH_ALPHABET[ch] as char);
            bit = 0;
            ch = 0;
        }
    }

    hash
}

/// Whether `location_id` starts with the geohash cell containing the
/// coordinate, at [`DEFAULT_GEOHASH_PRECISION`].
pub fn location_matches(location_id: &str, lat: f64, lon: f64) -> bool {
    location_id.starts_with(&encode_geohash(lat, lon, DEFAULT_GEOHASH_PRECISION))
}

//! Flower entity, its enums, and list filter selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::geo::BBox;
use crate::types::{EntityId, IsoTimestamp};
use crate::validation::validate_flower_input;

/// Value of the `owner` query parameter that restricts a listing to the caller.
pub const OWNER_ME: &str = "me";

/// Visual state of a flower. Only `flower1` and `flower2` can be planted;
/// `withered` is derived later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerTexture {
    Flower1,
    Flower2,
    Withered,
}

impl FlowerTexture {
    pub fn as_str(self) -> &'static str {
        match self {
            FlowerTexture::Flower1 => "flower1",
            FlowerTexture::Flower2 => "flower2",
            FlowerTexture::Withered => "withered",
        }
    }

    /// Parse a texture a client is allowed to plant.
    pub fn plantable(value: &str) -> Option<Self> {
        match value.parse::<FlowerTexture>() {
            Ok(texture @ (FlowerTexture::Flower1 | FlowerTexture::Flower2)) => Some(texture),
            _ => None,
        }
    }
}

impl FromStr for FlowerTexture {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "flower1" => Ok(FlowerTexture::Flower1),
            "flower2" => Ok(FlowerTexture::Flower2),
            "withered" => Ok(FlowerTexture::Withered),
            other => Err(CoreError::Internal(format!("unknown flower texture '{other}'"))),
        }
    }
}

impl fmt::Display for FlowerTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a flower was planted by the caller or by someone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowerType {
    Mine,
    Others,
}

impl FlowerType {
    pub fn as_str(self) -> &'static str {
        match self {
            FlowerType::Mine => "mine",
            FlowerType::Others => "others",
        }
    }
}

impl FromStr for FlowerType {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mine" => Ok(FlowerType::Mine),
            "others" => Ok(FlowerType::Others),
            other => Err(CoreError::Internal(format!("unknown flower type '{other}'"))),
        }
    }
}

impl fmt::Display for FlowerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A virtual flower planted at a coordinate, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flower {
    pub id: EntityId,
    pub lat: f64,
    pub lon: f64,
    pub texture: FlowerTexture,
    pub name: String,
    pub created_at: IsoTimestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wither_at: Option<IsoTimestamp>,
    pub owner_id: String,
    #[serde(rename = "type")]
    pub flower_type: FlowerType,
}

/// Body of `POST /flowers`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateFlowerInput {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub texture: Option<String>,
    #[validate(
        required(message = "Name must be between 1 and 120 characters"),
        length(min = 1, max = 120, message = "Name must be between 1 and 120 characters")
    )]
    pub name: Option<String>,
}

impl CreateFlowerInput {
    /// Validate the input and build the flower it describes.
    ///
    /// New flowers always belong to `owner_id` and are typed `mine`.
    pub fn into_flower(
        self,
        id: EntityId,
        owner_id: String,
        now: IsoTimestamp,
    ) -> Result<Flower, CoreError> {
        let errors = validate_flower_input(&self);
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        let texture = self.texture.as_deref().and_then(FlowerTexture::plantable);
        match (self.name, self.lat, self.lon, texture) {
            (Some(name), Some(lat), Some(lon), Some(texture)) => Ok(Flower {
                id,
                lat,
                lon,
                texture,
                name,
                created_at: now,
                wither_at: None,
                owner_id,
                flower_type: FlowerType::Mine,
            }),
            _ => Err(CoreError::Validation(errors)),
        }
    }
}

/// The single filter applied to a flower listing.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowerFilter {
    /// Flowers inside a bounding box (inclusive edges).
    BBox(BBox),
    /// Flowers owned by the given user.
    Owner(String),
    /// Flowers with the given raw `type` value.
    Type(String),
    /// Every flower.
    All,
}

impl FlowerFilter {
    /// Pick the filter for a listing request.
    ///
    /// Filters are mutually exclusive with precedence bbox > owner > type >
    /// none. `owner` only selects a filter when it equals [`OWNER_ME`], in
    /// which case the listing is restricted to `caller_id`. Empty `type`
    /// values count as absent.
    pub fn select(
        bbox: Option<BBox>,
        owner: Option<&str>,
        flower_type: Option<&str>,
        caller_id: &str,
    ) -> Self {
        if let Some(bbox) = bbox {
            return FlowerFilter::BBox(bbox);
        }
        if owner == Some(OWNER_ME) {
            return FlowerFilter::Owner(caller_id.to_string());
        }
        match flower_type {
            Some(t) if !t.is_empty() => FlowerFilter::Type(t.to_string()),
            _ => FlowerFilter::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    const BOX: BBox = BBox {
        west: 139.0,
        south: 35.0,
        east: 140.0,
        north: 36.0,
    };

    // -- filter precedence ---------------------------------------------------

    #[test]
    fn bbox_wins_over_owner_and_type() {
        let filter = FlowerFilter::select(Some(BOX), Some("me"), Some("others"), "u1");
        assert_eq!(filter, FlowerFilter::BBox(BOX));
    }

    #[test]
    fn owner_me_wins_over_type() {
        let filter = FlowerFilter::select(None, Some("me"), Some("others"), "u1");
        assert_eq!(filter, FlowerFilter::Owner("u1".into()));
    }

    #[test]
    fn owner_all_falls_through_to_type() {
        let filter = FlowerFilter::select(None, Some("all"), Some("others"), "u1");
        assert_eq!(filter, FlowerFilter::Type("others".into()));
    }

    #[test]
    fn no_filters_selects_all() {
        assert_eq!(FlowerFilter::select(None, None, None, "u1"), FlowerFilter::All);
        assert_eq!(
            FlowerFilter::select(None, Some("all"), Some(""), "u1"),
            FlowerFilter::All
        );
    }

    // -- enums ---------------------------------------------------------------

    #[test]
    fn only_two_textures_are_plantable() {
        assert_eq!(FlowerTexture::plantable("flower1"), Some(FlowerTexture::Flower1));
        assert_eq!(FlowerTexture::plantable("flower2"), Some(FlowerTexture::Flower2));
        assert_eq!(FlowerTexture::plantable("withered"), None);
        assert_eq!(FlowerTexture::plantable("invalid"), None);
    }

    #[test]
    fn unknown_stored_values_fail_to_parse() {
        assert_matches!("rose".parse::<FlowerTexture>(), Err(CoreError::Internal(_)));
        assert_matches!("theirs".parse::<FlowerType>(), Err(CoreError::Internal(_)));
        assert_eq!("others".parse::<FlowerType>().unwrap(), FlowerType::Others);
    }

    // -- creation ------------------------------------------------------------

    #[test]
    fn new_flower_is_typed_mine() {
        let flower = CreateFlowerInput {
            lat: Some(35.6762),
            lon: Some(139.6503),
            texture: Some("flower1".into()),
            name: Some("Test".into()),
        }
        .into_flower("f-1".into(), "u1".into(), "2024-06-01T09:00:00.000Z".into())
        .unwrap();

        assert_eq!(flower.flower_type, FlowerType::Mine);
        assert_eq!(flower.owner_id, "u1");
        assert_eq!(flower.wither_at, None);

        let json = serde_json::to_value(&flower).unwrap();
        assert_eq!(json["type"], "mine");
        assert_eq!(json["texture"], "flower1");
        assert_eq!(json["createdAt"], "2024-06-01T09:00:00.000Z");
        assert!(json.get("witherAt").is_none());
    }

    #[test]
    fn withered_texture_cannot_be_planted() {
        let result = CreateFlowerInput {
            lat: Some(0.0),
            lon: Some(0.0),
            texture: Some("withered".into()),
            name: Some("Dry".into()),
        }
        .into_flower("f-2".into(), "u1".into(), "2024-06-01T09:00:00.000Z".into());
        assert_matches!(result, Err(CoreError::Validation(_)));
    }
}

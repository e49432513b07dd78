//! `flowers` rows.

use hapipath_core::error::CoreError;
use hapipath_core::flower::Flower;
use sqlx::FromRow;

/// A row from the `flowers` table.
///
/// `texture` and `type` are stored as text and parsed into enums on
/// conversion; an unknown value is an internal error.
#[derive(Debug, Clone, FromRow)]
pub struct FlowerRow {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub texture: String,
    pub name: String,
    pub created_at: String,
    pub wither_at: Option<String>,
    pub owner_id: String,
    #[sqlx(rename = "type")]
    pub flower_type: String,
}

impl TryFrom<FlowerRow> for Flower {
    type Error = CoreError;

    fn try_from(row: FlowerRow) -> Result<Self, Self::Error> {
        Ok(Flower {
            texture: row.texture.parse()?,
            flower_type: row.flower_type.parse()?,
            id: row.id,
            lat: row.lat,
            lon: row.lon,
            name: row.name,
            created_at: row.created_at,
            wither_at: row.wither_at,
            owner_id: row.owner_id,
        })
    }
}

/// Convert a batch of rows, failing on the first bad one.
pub fn into_flowers(rows: Vec<FlowerRow>) -> Result<Vec<Flower>, CoreError> {
    rows.into_iter().map(Flower::try_from).collect()
}

#[cfg(test)]
mod tests {
    use hapipath_core::flower::{FlowerTexture, FlowerType};

    use super::*;

    fn row(texture: &str, flower_type: &str) -> FlowerRow {
        FlowerRow {
            id: "f-1".into(),
            lat: 35.6762,
            lon: 139.6503,
            texture: texture.into(),
            name: "Test".into(),
            created_at: "2024-06-01T09:00:00.000Z".into(),
            wither_at: Some("2024-06-08T09:00:00.000Z".into()),
            owner_id: "someone-else".into(),
            flower_type: flower_type.into(),
        }
    }

    #[test]
    fn converts_stored_enums() {
        let flower = Flower::try_from(row("withered", "others")).unwrap();
        assert_eq!(flower.texture, FlowerTexture::Withered);
        assert_eq!(flower.flower_type, FlowerType::Others);
        assert_eq!(flower.wither_at.as_deref(), Some("2024-06-08T09:00:00.000Z"));
    }

    #[test]
    fn unknown_texture_is_an_error() {
        assert!(Flower::try_from(row("tulip", "mine")).is_err());
    }

    #[test]
    fn batch_conversion_stops_on_bad_row() {
        let rows = vec![row("flower1", "mine"), row("flower2", "nobody")];
        assert!(into_flowers(rows).is_err());
    }
}

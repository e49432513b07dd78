//! Repository for the `flowers` table.
//!
//! Listing picks one of eight fixed statements: one per [`FlowerFilter`]
//! variant, each with and without a cursor bound.

use hapipath_core::flower::{Flower, FlowerFilter};

use crate::models::flower::FlowerRow;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, lat, lon, texture, name, created_at, wither_at, owner_id, type";

/// Provides create, lookup, delete and filtered cursor listing for flowers.
pub struct FlowerRepo;

impl FlowerRepo {
    /// Insert a fully built flower, returning the stored row.
    pub async fn create(pool: &DbPool, flower: &Flower) -> Result<FlowerRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO flowers (
                id, lat, lon, texture, name, created_at, wither_at, owner_id, type
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FlowerRow>(&query)
            .bind(&flower.id)
            .bind(flower.lat)
            .bind(flower.lon)
            .bind(flower.texture.as_str())
            .bind(&flower.name)
            .bind(&flower.created_at)
            .bind(&flower.wither_at)
            .bind(&flower.owner_id)
            .bind(flower.flower_type.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a flower by id.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<FlowerRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM flowers WHERE id = ?");
        sqlx::query_as::<_, FlowerRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List flowers matching `filter`, newest first.
    ///
    /// With a cursor, only rows created strictly before it are returned.
    /// Bounding boxes include their edges.
    pub async fn list(
        pool: &DbPool,
        filter: &FlowerFilter,
        cursor: Option<&str>,
        limit: i64,
    ) -> Result<Vec<FlowerRow>, sqlx::Error> {
        let condition = match (filter, cursor.is_some()) {
            (FlowerFilter::BBox(_), false) => "WHERE lat >= ? AND lat <= ? AND lon >= ? AND lon <= ?",
            (FlowerFilter::BBox(_), true) => {
                "WHERE lat >= ? AND lat <= ? AND lon >= ? AND lon <= ? AND created_at < ?"
            }
            (FlowerFilter::Owner(_), false) => "WHERE owner_id = ?",
            (FlowerFilter::Owner(_), true) => "WHERE owner_id = ? AND created_at < ?",
            (FlowerFilter::Type(_), false) => "WHERE type = ?",
            (FlowerFilter::Type(_), true) => "WHERE type = ? AND created_at < ?",
            (FlowerFilter::All, false) => "",
            (FlowerFilter::All, true) => "WHERE created_at < ?",
        };
        let query =
            format!("SELECT {COLUMNS} FROM flowers {condition} ORDER BY created_at DESC LIMIT ?");

        let mut statement = sqlx::query_as::<_, FlowerRow>(&query);
        statement = match filter {
            FlowerFilter::BBox(bbox) => statement
                .bind(bbox.south)
                .bind(bbox.north)
                .bind(bbox.west)
                .bind(bbox.east),
            FlowerFilter::Owner(owner_id) => statement.bind(owner_id),
            FlowerFilter::Type(flower_type) => statement.bind(flower_type),
            FlowerFilter::All => statement,
        };
        if let Some(cursor) = cursor {
            statement = statement.bind(cursor);
        }

        statement.bind(limit).fetch_all(pool).await
    }

    /// Permanently delete a flower. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM flowers WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

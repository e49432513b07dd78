//! Repository for the `memories` table.

use hapipath_core::memory::{Memory, UpdateMemoryInput};

use crate::models::memory::MemoryRow;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, memory_date, created_at, updated_at, \
                       user_id, location_id, lat, lon, location_name";

/// Provides CRUD and cursor listing for memories.
pub struct MemoryRepo;

impl MemoryRepo {
    /// Insert a fully built memory, returning the stored row.
    pub async fn create(pool: &DbPool, memory: &Memory) -> Result<MemoryRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO memories (
                id, title, description, memory_date, created_at, updated_at,
                user_id, location_id, lat, lon, location_name
             ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MemoryRow>(&query)
            .bind(&memory.id)
            .bind(&memory.title)
            .bind(&memory.description)
            .bind(&memory.memory_date)
            .bind(&memory.created_at)
            .bind(&memory.updated_at)
            .bind(&memory.user_id)
            .bind(&memory.location_id)
            .bind(memory.lat)
            .bind(memory.lon)
            .bind(&memory.location_name)
            .fetch_one(pool)
            .await
    }

    /// Find a memory by id.
    pub async fn find_by_id(pool: &DbPool, id: &str) -> Result<Option<MemoryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM memories WHERE id = ?");
        sqlx::query_as::<_, MemoryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List memories at a location, newest first.
    ///
    /// With a cursor, only rows created strictly before it are returned.
    pub async fn list_by_location(
        pool: &DbPool,
        location_id: &str,
        cursor: Option<&str>,
        limit: i64,
    ) -> Result<Vec<MemoryRow>, sqlx::Error> {
        match cursor {
            Some(cursor) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM memories
                     WHERE location_id = ? AND created_at < ?
                     ORDER BY created_at DESC
                     LIMIT ?"
                );
                sqlx::query_as::<_, MemoryRow>(&query)
                    .bind(location_id)
                    .bind(cursor)
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM memories
                     WHERE location_id = ?
                     ORDER BY created_at DESC
                     LIMIT ?"
                );
                sqlx::query_as::<_, MemoryRow>(&query)
                    .bind(location_id)
                    .bind(limit)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Update a memory. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always overwritten.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: &str,
        input: &UpdateMemoryInput,
        updated_at: &str,
    ) -> Result<Option<MemoryRow>, sqlx::Error> {
        let query = format!(
            "UPDATE memories SET
                title = COALESCE(?, title),
                description = COALESCE(?, description),
                memory_date = COALESCE(?, memory_date),
                updated_at = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MemoryRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.memory_date)
            .bind(updated_at)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a memory. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM memories WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

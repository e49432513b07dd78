//! `memories` rows.

use hapipath_core::memory::Memory;
use sqlx::FromRow;

/// A row from the `memories` table.
#[derive(Debug, Clone, FromRow)]
pub struct MemoryRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub memory_date: String,
    pub created_at: String,
    pub updated_at: String,
    pub user_id: String,
    pub location_id: String,
    pub lat: f64,
    pub lon: f64,
    pub location_name: Option<String>,
}

impl From<MemoryRow> for Memory {
    fn from(row: MemoryRow) -> Self {
        Memory {
            id: row.id,
            title: row.title,
            description: row.description,
            memory_date: row.memory_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
            user_id: row.user_id,
            location_id: row.location_id,
            lat: row.lat,
            lon: row.lon,
            location_name: row.location_name,
        }
    }
}

use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Invalid geohash: {0}")]
    InvalidGeohash(String),

    #[error("Invalid bbox: {0}")]
    InvalidBbox(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: impl Into<EntityId>) -> Self {
        CoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

//! Domain layer for the Hapipath location API.
//!
//! Pure types and rules shared by the database and HTTP crates: entities,
//! input DTOs, validation, bounding boxes, geohashes and pagination. Nothing
//! in this crate performs I/O.

pub mod error;
pub mod flower;
pub mod geo;
pub mod memory;
pub mod pagination;
pub mod types;
pub mod validation;

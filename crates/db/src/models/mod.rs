//! Row structs and their conversion into API types.
//!
//! Each submodule contains a `FromRow` struct matching the table columns and
//! a conversion into the camelCase entity from `hapipath_core`.

pub mod flower;
pub mod memory;

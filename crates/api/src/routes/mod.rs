pub mod flowers;
pub mod health;
pub mod memories;

use axum::Router;

use crate::state::AppState;

/// All resource routes.
///
/// Route hierarchy:
///
/// ```text
/// /locations/{location_id}/memories   list, create
/// /memories                           create (location in body)
/// /memories/{id}                      get, update, delete
/// /flowers                            list, create
/// /flowers/{id}                       get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/locations", memories::location_router())
        .nest("/memories", memories::router())
        .nest("/flowers", flowers::router())
}

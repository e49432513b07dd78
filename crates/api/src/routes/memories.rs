//! Route definitions for memories.
//!
//! Two routers are provided:
//! - `location_router()` for location-scoped routes mounted at `/locations`
//! - `router()` for memory-specific routes mounted at `/memories`

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::memories;
use crate::state::AppState;

/// Location-scoped routes mounted at `/locations`.
///
/// ```text
/// GET    /{location_id}/memories   -> list_for_location
/// POST   /{location_id}/memories   -> create_at_location
/// ```
pub fn location_router() -> Router<AppState> {
    Router::new().route(
        "/{location_id}/memories",
        get(memories::list_for_location).post(memories::create_at_location),
    )
}

/// Memory routes mounted at `/memories`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(memories::create)).route(
        "/{id}",
        get(memories::get_by_id)
            .patch(memories::update)
            .delete(memories::delete),
    )
}

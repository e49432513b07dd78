//! Route definitions for flowers, mounted at `/flowers`.

use axum::routing::get;
use axum::Router;

use crate::handlers::flowers;
use crate::state::AppState;

/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(flowers::list).post(flowers::create))
        .route("/{id}", get(flowers::get_by_id).delete(flowers::delete))
}

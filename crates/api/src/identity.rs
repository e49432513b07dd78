//! Caller identity extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::state::AppState;

/// The user a request is attributed to.
///
/// There is no authentication yet, so every request resolves to the
/// configured anonymous identity (`ANONYMOUS_USER_ID`). Handlers take this
/// as an extractor parameter so the identity source can change in one place:
///
/// ```ignore
/// async fn my_handler(caller: Caller) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %caller.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: String,
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Caller {
            user_id: state.config.anonymous_user_id.clone(),
        })
    }
}

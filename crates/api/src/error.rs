use std::any::Any;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hapipath_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the failures that only
/// occur at the HTTP boundary. Implements [`IntoResponse`] to produce
/// `{ code, message, details? }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hapipath_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A request body that is not valid JSON for the target type.
    #[error("Invalid JSON body: {0}")]
    Json(#[from] JsonRejection),

    /// A query string that does not fit the handler's parameters.
    #[error("Invalid query string: {0}")]
    Query(#[from] QueryRejection),

    /// Path segments that do not fit the handler's parameters.
    #[error("Invalid path parameters: {0}")]
    Path(#[from] PathRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Generic message returned for every server-side failure.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity = %entity, id = %id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} not found"),
                        None,
                    )
                }
                CoreError::Validation(errors) => (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Invalid input".to_string(),
                    Some(errors.clone()),
                ),
                CoreError::InvalidGeohash(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_GEOHASH", msg.clone(), None)
                }
                CoreError::InvalidBbox(msg) => {
                    (StatusCode::BAD_REQUEST, "INVALID_BBOX", msg.clone(), None)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }

            // --- Request parsing ---
            AppError::Json(rejection) => invalid_input(rejection.body_text()),
            AppError::Query(rejection) => invalid_input(rejection.body_text()),
            AppError::Path(rejection) => invalid_input(rejection.body_text()),
        };

        error_response(status, code, message, details)
    }
}

fn invalid_input(detail: String) -> (StatusCode, &'static str, String, Option<Vec<String>>) {
    (
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        "Invalid input".to_string(),
        Some(vec![detail]),
    )
}

fn internal() -> (StatusCode, &'static str, String, Option<Vec<String>>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
        None,
    )
}

fn error_response(
    status: StatusCode,
    code: &str,
    message: String,
    details: Option<Vec<String>>,
) -> Response {
    let mut body = json!({
        "code": code,
        "message": message,
    });
    if let Some(details) = details {
        body["details"] = json!(details);
    }

    (status, axum::Json(body)).into_response()
}

/// Response for a handler that panicked, installed on `CatchPanicLayer`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(panic = %detail, "Handler panicked");

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "UNKNOWN_ERROR",
        "An unknown error occurred".to_string(),
        None,
    )
}


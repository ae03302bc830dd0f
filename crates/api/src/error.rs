use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::limits::truncate_chars;
use folio_core::ValidationError;
use folio_db::StorageError;
use serde_json::json;

/// Maximum length of a storage failure description returned to callers.
pub const ERROR_DETAIL_LENGTH: usize = 200;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the shape `{ "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The payload violated its record kind's constraints.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A document store failure (including a disabled store).
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The body could not be read as JSON.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": err.to_string(),
                    "code": "VALIDATION_ERROR",
                    "details": err.violations,
                }),
            ),

            AppError::Storage(StorageError::Disabled) => {
                tracing::warn!("Write attempted while the document store is disabled");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": StorageError::Disabled.to_string(),
                        "code": "SERVICE_UNAVAILABLE",
                    }),
                )
            }
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": truncate_chars(&err.to_string(), ERROR_DETAIL_LENGTH),
                        "code": "STORAGE_ERROR",
                    }),
                )
            }

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
            AppError::InvalidBody(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": msg, "code": "INVALID_BODY" }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}

//! Request extractors whose rejections use the crate's error body.

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor that rejects with [`AppError::InvalidBody`]
/// instead of axum's plain-text response.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

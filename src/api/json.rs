//! JSON body extractor whose rejections use the `{error}` payload

use axum::extract::FromRequest;

use crate::error::AppError;

/// Like `axum::Json`, but a body that is not valid JSON or does not match the
/// request type is rejected as a 400 validation error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

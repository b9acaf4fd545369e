//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use salver_core::ValidationError;
use serde_json::json;
use thiserror::Error;

/// A failure produced by an API handler.
///
/// Every failure a handler can hit maps onto one of these variants, so the
/// wire shape of error responses is decided in exactly one place.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("Contact not found")]
  NotFound,

  #[error("store error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
      ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
      ApiError::Storage(e) => {
        // Full detail stays server-side; callers get a fixed message.
        tracing::error!(error = %e, "storage failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "Server error. Please try again later.".to_string(),
        )
      }
    };
    (status, Json(json!({ "message": message }))).into_response()
  }
}

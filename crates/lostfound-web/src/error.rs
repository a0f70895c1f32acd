//! Error types and axum `IntoResponse` implementation.

use axum::{
  extract::multipart::MultipartError,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The request body could not be read; carries the status axum assigned
  /// (400 for malformed input, 413 past the body limit).
  #[error("rejected request ({0}): {1}")]
  Rejected(StatusCode, String),
  #[error("upload error: {0}")]
  Upload(#[from] std::io::Error),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<MultipartError> for Error {
  fn from(e: MultipartError) -> Self {
    Error::Rejected(e.status(), e.body_text())
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Rejected(status, msg) => {
        tracing::warn!(%status, %msg, "rejected request");
        (status, msg).into_response()
      }
      Error::Upload(e) => {
        tracing::error!(error = %e, "failed to store upload");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
      Error::Store(e) => {
        tracing::error!(error = %e, "store operation failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
    }
  }
}

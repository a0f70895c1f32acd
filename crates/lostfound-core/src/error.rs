//! Error types for `lostfound-core`.

use thiserror::Error;

/// Why an [`ItemDraft`](crate::item::ItemDraft) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("title is required")]
  EmptyTitle,

  #[error("status must be \"Lost\" or \"Found\", got {0:?}")]
  InvalidStatus(String),
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("validation error: {0}")]
  Validation(#[from] ValidationError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

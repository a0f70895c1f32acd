//! `POST /delete/{id}`: remove an item unconditionally.
//!
//! Deleting an id that does not exist (or is not even a UUID) is not an
//! error; the user sees the same confirmation either way.

use axum::{
  extract::{Path, State},
  response::Response,
};
use lostfound_core::store::ItemRepository;
use uuid::Uuid;

use crate::{AppState, error::Error, flash::Flash};

pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Response, Error>
where
  S: ItemRepository + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  match Uuid::parse_str(&id) {
    Ok(uuid) => {
      let removed = state
        .store
        .delete(uuid)
        .await
        .map_err(|e| Error::Store(Box::new(e)))?;
      tracing::info!(%uuid, removed, "delete requested");
    }
    Err(_) => tracing::debug!(%id, "ignoring delete of malformed id"),
  }

  Ok(Flash::info("Item deleted successfully.").redirect("/"))
}

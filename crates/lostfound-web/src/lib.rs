//! HTTP front end for the lost-and-found tracker.
//!
//! Exposes an axum [`Router`] with the list, create and delete pages, backed
//! by any [`ItemRepository`], plus static serving of uploaded photos.

pub mod blob;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod render;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  extract::DefaultBodyLimit,
  routing::{get, post},
};
use lostfound_core::store::ItemRepository;
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use blob::{BlobStore, PUBLIC_PREFIX};
use handlers::{add, delete, list};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `LOSTFOUND_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  pub store_path:       PathBuf,
  pub upload_dir:       PathBuf,
  /// Upper bound on a request body, photo included.
  pub max_upload_bytes: usize,
}

impl ServerConfig {
  pub const DEFAULT_HOST: &'static str = "127.0.0.1";
  pub const DEFAULT_PORT: u16 = 5000;
  pub const DEFAULT_STORE_PATH: &'static str = "lostfound.db";
  pub const DEFAULT_UPLOAD_DIR: &'static str = "static/uploads";
  pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ItemRepository> {
  pub store:  Arc<S>,
  pub blobs:  Arc<BlobStore>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application [`Router`].
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ItemRepository + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let uploads = ServeDir::new(state.blobs.root_dir());
  let body_limit = state.config.max_upload_bytes;

  Router::new()
    .route("/",             get(list::handler::<S>))
    .route("/add",          get(add::form).post(add::submit::<S>))
    .route("/delete/{id}",  post(delete::handler::<S>))
    .nest_service(PUBLIC_PREFIX, uploads)
    .layer(DefaultBodyLimit::max(body_limit))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────

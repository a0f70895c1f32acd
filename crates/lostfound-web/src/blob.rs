//! Photo uploads stored as plain files under one directory.
//!
//! Every upload gets a fresh name, so nothing is ever overwritten or
//! deduplicated. Stored files are served back under [`PUBLIC_PREFIX`].

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;
use uuid::Uuid;

/// URL path under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/static/uploads";

/// Upload storage rooted at a single directory.
#[derive(Debug, Clone)]
pub struct BlobStore {
  root_dir: PathBuf,
}

impl BlobStore {
  /// Create the store, making `root_dir` if it does not exist.
  pub async fn new(root_dir: impl AsRef<Path>) -> std::io::Result<Self> {
    let root_dir = root_dir.as_ref().to_path_buf();
    fs::create_dir_all(&root_dir).await?;
    info!(path = %root_dir.display(), "initialized upload directory");
    Ok(Self { root_dir })
  }

  pub fn root_dir(&self) -> &Path { &self.root_dir }

  /// Persist `data` and return the generated name.
  ///
  /// The name is a fresh UUID followed by the sanitized `filename_hint`, so
  /// two uploads of `photo.jpg` never collide.
  pub async fn store(&self, data: &[u8], filename_hint: &str) -> std::io::Result<String> {
    let id = Uuid::new_v4().simple().to_string();
    let safe = sanitize_filename(filename_hint);
    let name = if safe.is_empty() { id } else { format!("{id}_{safe}") };

    fs::write(self.root_dir.join(&name), data).await?;
    info!(%name, size = data.len(), "stored upload");
    Ok(name)
  }

  /// Public URL of a stored name.
  pub fn url(name: &str) -> String { format!("{PUBLIC_PREFIX}/{name}") }
}

/// Reduce a client-supplied filename to a safe single path component.
///
/// Directory parts are dropped, spaces become `_`, anything outside ASCII
/// letters, digits, `.`, `-` and `_` is removed, and leading dots are
/// stripped so the result can never be hidden or climb out of the directory.
pub fn sanitize_filename(hint: &str) -> String {
  let base = hint.rsplit(['/', '\\']).next().unwrap_or_default();
  let cleaned: String = base
    .chars()
    .filter_map(|c| match c {
      ' ' => Some('_'),
      c if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') => Some(c),
      _ => None,
    })
    .collect();
  cleaned.trim_start_matches('.').to_owned()
}

//! `GET /add` and `POST /add`: report a new item.
//!
//! The draft is validated before the photo is written, so a rejected
//! submission leaves no orphaned upload behind.

use axum::{
  extract::{Multipart, State},
  http::HeaderMap,
  response::Response,
};
use bytes::Bytes;
use lostfound_core::{item::ItemDraft, store::ItemRepository};

use crate::{AppState, error::Error, flash::Flash, handlers::page, render};

pub const REQUIRED_MESSAGE: &str = "Title and Status are required.";
pub const ADDED_MESSAGE: &str = "Item added successfully!";

/// An uploaded file: client filename and contents.
struct Upload {
  file_name: String,
  data:      Bytes,
}

/// `GET /add`
pub async fn form(headers: HeaderMap) -> Response {
  let flash = Flash::from_headers(&headers);
  page(render::form(flash.as_ref()), flash.is_some())
}

/// `POST /add`: multipart body with `title`, `description`, `status`,
/// `location`, `contact` and an optional `photo` file.
pub async fn submit<S>(
  State(state): State<AppState<S>>,
  multipart: Multipart,
) -> Result<Response, Error>
where
  S: ItemRepository + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let (mut draft, upload) = read_form(multipart).await?;

  if let Err(e) = draft.validate() {
    tracing::info!(reason = %e, "rejected item submission");
    return Ok(Flash::danger(REQUIRED_MESSAGE).redirect("/add"));
  }

  if let Some(upload) = upload {
    draft.photo = Some(state.blobs.store(&upload.data, &upload.file_name).await?);
  }

  let item = state
    .store
    .create(draft)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  tracing::info!(id = %item.id, status = %item.status, "item created");

  Ok(Flash::success(ADDED_MESSAGE).redirect("/"))
}

/// Collect the known fields; unknown fields are skipped. A file part with an
/// empty filename is what browsers send when no file was chosen.
async fn read_form(mut multipart: Multipart) -> Result<(ItemDraft, Option<Upload>), Error> {
  let mut draft = ItemDraft::default();
  let mut upload = None;

  while let Some(field) = multipart.next_field().await? {
    let Some(name) = field.name().map(str::to_owned) else {
      continue;
    };
    match name.as_str() {
      "title" => draft.title = field.text().await?,
      "description" => draft.description = field.text().await?,
      "status" => draft.status = field.text().await?,
      "location" => draft.location = field.text().await?,
      "contact" => draft.contact = field.text().await?,
      "photo" => {
        let file_name = field.file_name().unwrap_or_default().to_owned();
        let data = field.bytes().await?;
        if !file_name.is_empty() {
          upload = Some(Upload { file_name, data });
        }
      }
      _ => {}
    }
  }

  Ok((draft, upload))
}

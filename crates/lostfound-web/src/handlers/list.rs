//! `GET /`: the filtered item list.

use axum::{
  extract::{Query, State},
  http::HeaderMap,
  response::Response,
};
use lostfound_core::store::{ItemQuery, ItemRepository};
use serde::Deserialize;

use crate::{AppState, error::Error, flash::Flash, handlers::page, render};

#[derive(Debug, Deserialize, Default)]
pub struct ListParams {
  /// Free text matched against title, description and location.
  pub q:      Option<String>,
  /// `Lost` or `Found`; anything else shows both.
  pub status: Option<String>,
}

/// `GET /[?q=...][&status=...]`
pub async fn handler<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<ListParams>,
  headers: HeaderMap,
) -> Result<Response, Error>
where
  S: ItemRepository + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let query = ItemQuery::from_params(params.q.as_deref(), params.status.as_deref());

  let items = state
    .store
    .list(&query)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  tracing::debug!(?query, count = items.len(), "listed items");

  let flash = Flash::from_headers(&headers);
  let html = render::index(
    &items,
    params.q.as_deref().unwrap_or_default().trim(),
    params.status.as_deref().unwrap_or_default(),
    flash.as_ref(),
  );
  Ok(page(html, flash.is_some()))
}

//! [`SqliteStore`]: the SQLite implementation of [`ItemRepository`].

use std::path::Path;

use chrono::{SubsecRound, Utc};
use uuid::Uuid;

use lostfound_core::{
  item::{Item, ItemDraft},
  store::{ItemQuery, ItemRepository},
};

use crate::{
  Result,
  encode::{RawItem, encode_dt, encode_photo, encode_status, encode_uuid},
  query::{build_list, register_fold_case},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An item store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::from_connection(conn).await
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::from_connection(conn).await
  }

  /// Install the SQL functions queries rely on, then initialise the schema.
  async fn from_connection(conn: tokio_rusqlite::Connection) -> Result<Self> {
    conn
      .call(|conn| {
        register_fold_case(conn)?;
        Ok(())
      })
      .await?;
    let store = Self { conn };
    store.initialize().await?;
    Ok(store)
  }

  /// Insert a fully-built [`Item`] into the `items` table.
  async fn insert_item(&self, item: &Item) -> Result<()> {
    let id_str         = encode_uuid(item.id);
    let title          = item.title.clone();
    let description    = item.description.clone();
    let status_str     = encode_status(item.status);
    let location       = item.location.clone();
    let photo_str      = encode_photo(item.photo.as_deref());
    let contact        = item.contact.clone();
    let created_at_str = encode_dt(item.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO items (
             id, title, description, status, location, photo, contact, created_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            id_str,
            title,
            description,
            status_str,
            location,
            photo_str,
            contact,
            created_at_str,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ItemRepository impl ─────────────────────────────────────────────────────

impl ItemRepository for SqliteStore {
  type Error = crate::Error;

  async fn initialize(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list(&self, query: &ItemQuery) -> Result<Vec<Item>> {
    let stmt = build_list(query);

    let raws: Vec<RawItem> = self
      .conn
      .call(move |conn| {
        let mut prepared = conn.prepare(&stmt.sql)?;
        let rows = prepared
          .query_map(rusqlite::params_from_iter(stmt.params.iter()), RawItem::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawItem::into_item).collect()
  }

  async fn create(&self, draft: ItemDraft) -> Result<Item> {
    let new  = draft.validate()?;
    let item = new.into_item(Uuid::new_v4(), Utc::now().trunc_subsecs(0));

    self.insert_item(&item).await?;
    Ok(item)
  }

  async fn delete(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let removed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM items WHERE id = ?1", rusqlite::params![id_str])?)
      })
      .await?;

    Ok(removed > 0)
  }
}

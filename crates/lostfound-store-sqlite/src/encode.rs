//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as `YYYY-MM-DD HH:MM:SS` in UTC, which sorts
//! lexicographically in time order. UUIDs are stored as hyphenated lowercase
//! strings. A missing photo is stored as the empty string.

use chrono::{DateTime, NaiveDateTime, Utc};
use lostfound_core::item::{Item, Status};
use uuid::Uuid;

use crate::{Error, Result};

const DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.format(DT_FORMAT).to_string() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  NaiveDateTime::parse_from_str(s, DT_FORMAT)
    .map(|dt| dt.and_utc())
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Status ──────────────────────────────────────────────────────────────────

pub fn encode_status(s: Status) -> &'static str { s.as_str() }

pub fn decode_status(s: &str) -> Result<Status> {
  s.parse().map_err(|_| Error::UnknownStatus(s.to_owned()))
}

// ─── Photo ───────────────────────────────────────────────────────────────────

pub fn encode_photo(photo: Option<&str>) -> String {
  photo.unwrap_or_default().to_owned()
}

pub fn decode_photo(s: Option<String>) -> Option<String> {
  s.filter(|p| !p.is_empty())
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list matching the field order of [`RawItem::from_row`].
pub const ITEM_COLUMNS: &str =
  "id, title, description, status, location, photo, contact, created_at";

/// Raw strings read directly from an `items` row. Optional text columns may
/// be NULL in rows written by other tools.
pub struct RawItem {
  pub id:          String,
  pub title:       String,
  pub description: Option<String>,
  pub status:      String,
  pub location:    Option<String>,
  pub photo:       Option<String>,
  pub contact:     Option<String>,
  pub created_at:  String,
}

impl RawItem {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      title:       row.get(1)?,
      description: row.get(2)?,
      status:      row.get(3)?,
      location:    row.get(4)?,
      photo:       row.get(5)?,
      contact:     row.get(6)?,
      created_at:  row.get(7)?,
    })
  }

  pub fn into_item(self) -> Result<Item> {
    Ok(Item {
      id:          decode_uuid(&self.id)?,
      title:       self.title,
      description: self.description.unwrap_or_default(),
      status:      decode_status(&self.status)?,
      location:    self.location.unwrap_or_default(),
      photo:       decode_photo(self.photo),
      contact:     self.contact.unwrap_or_default(),
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn dt_is_second_precision_text() {
    let dt = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
    assert_eq!(encode_dt(dt), "2024-03-09 07:05:01");
    assert_eq!(decode_dt("2024-03-09 07:05:01").unwrap(), dt);
    assert!(decode_dt("2024-03-09T07:05:01Z").is_err());
  }

  #[test]
  fn unknown_status_is_an_error() {
    assert!(matches!(decode_status("lost"), Err(Error::UnknownStatus(_))));
  }

  #[test]
  fn empty_photo_decodes_to_none() {
    assert_eq!(decode_photo(Some(String::new())), None);
    assert_eq!(decode_photo(None), None);
    assert_eq!(decode_photo(Some("a.jpg".into())).as_deref(), Some("a.jpg"));
    assert_eq!(encode_photo(None), "");
  }
}

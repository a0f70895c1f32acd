//! Item types, the single entity of the lost-and-found tracker.
//!
//! An item is written once and never updated. Callers submit an [`ItemDraft`]
//! carrying raw form input; validation turns it into a [`NewItem`] and the
//! store stamps the id and creation time to produce an [`Item`].

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::ValidationError;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Whether the item was lost or found by the person reporting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
  Lost,
  Found,
}

impl Status {
  pub const ALL: [Status; 2] = [Status::Lost, Status::Found];

  /// The exact spelling stored in the `status` column and accepted from forms.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Lost => "Lost",
      Self::Found => "Found",
    }
  }
}

impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Matching is exact and case-sensitive: `"lost"` is rejected.
impl FromStr for Status {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "Lost" => Ok(Self::Lost),
      "Found" => Ok(Self::Found),
      other => Err(ValidationError::InvalidStatus(other.to_owned())),
    }
  }
}

// ─── Item ────────────────────────────────────────────────────────────────────

/// A persisted lost-or-found record. No field changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
  pub id:          Uuid,
  pub title:       String,
  pub description: String,
  pub status:      Status,
  pub location:    String,
  /// Name returned by the blob store, if a photo was attached.
  pub photo:       Option<String>,
  pub contact:     String,
  /// Store-assigned, truncated to whole seconds.
  pub created_at:  DateTime<Utc>,
}

// ─── ItemDraft ───────────────────────────────────────────────────────────────

/// Unvalidated input to [`crate::store::ItemRepository::create`], as it
/// arrives from a form.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
  pub title:       String,
  pub description: String,
  pub status:      String,
  pub location:    String,
  pub contact:     String,
  pub photo:       Option<String>,
}

impl ItemDraft {
  /// Check the presence rules and normalise whitespace.
  ///
  /// The title must be non-empty after trimming and the status must be
  /// exactly `Lost` or `Found`. Free-text fields are trimmed; an empty photo
  /// name counts as no photo.
  pub fn validate(&self) -> Result<NewItem, ValidationError> {
    let title = self.title.trim();
    if title.is_empty() {
      return Err(ValidationError::EmptyTitle);
    }
    let status = self.status.parse::<Status>()?;

    Ok(NewItem {
      title: title.to_owned(),
      description: self.description.trim().to_owned(),
      status,
      location: self.location.trim().to_owned(),
      contact: self.contact.trim().to_owned(),
      photo: self.photo.clone().filter(|p| !p.is_empty()),
    })
  }
}

// ─── NewItem ─────────────────────────────────────────────────────────────────

/// A draft that passed validation. `id` and `created_at` are always set by
/// the store; they are not accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
  pub title:       String,
  pub description: String,
  pub status:      Status,
  pub location:    String,
  pub contact:     String,
  pub photo:       Option<String>,
}

impl NewItem {
  /// Attach an id and timestamp, producing the record to persist.
  pub fn into_item(self, id: Uuid, created_at: DateTime<Utc>) -> Item {
    Item {
      id,
      title: self.title,
      description: self.description,
      status: self.status,
      location: self.location,
      photo: self.photo,
      contact: self.contact,
      created_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn draft(title: &str, status: &str) -> ItemDraft {
    ItemDraft {
      title: title.into(),
      status: status.into(),
      ..ItemDraft::default()
    }
  }

  #[test]
  fn status_parse_is_exact() {
    assert_eq!("Lost".parse::<Status>().unwrap(), Status::Lost);
    assert_eq!("Found".parse::<Status>().unwrap(), Status::Found);
    assert!("lost".parse::<Status>().is_err());
    assert!(" Found".parse::<Status>().is_err());
    assert!("".parse::<Status>().is_err());
  }

  #[test]
  fn validate_trims_text_fields() {
    let mut d = draft("  Blue Backpack ", "Lost");
    d.description = " navy, two straps\n".into();
    d.location = "\tLibrary ".into();
    d.contact = " ana@example.com ".into();

    let new = d.validate().unwrap();
    assert_eq!(new.title, "Blue Backpack");
    assert_eq!(new.description, "navy, two straps");
    assert_eq!(new.location, "Library");
    assert_eq!(new.contact, "ana@example.com");
    assert_eq!(new.status, Status::Lost);
  }

  #[test]
  fn validate_rejects_blank_title() {
    assert_eq!(draft("", "Lost").validate(), Err(ValidationError::EmptyTitle));
    assert_eq!(
      draft("   \t", "Found").validate(),
      Err(ValidationError::EmptyTitle)
    );
  }

  #[test]
  fn validate_rejects_unknown_status() {
    let err = draft("Keys", "Stolen").validate().unwrap_err();
    assert_eq!(err, ValidationError::InvalidStatus("Stolen".into()));
  }

  #[test]
  fn empty_photo_name_is_no_photo() {
    let mut d = draft("Keys", "Found");
    d.photo = Some(String::new());
    assert_eq!(d.validate().unwrap().photo, None);
  }
}

//! The `ItemRepository` trait and its query type.
//!
//! The trait is implemented by storage backends (`lostfound-store-sqlite`,
//! and [`crate::memory::MemoryRepository`] for tests). The web layer depends
//! on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::item::{Item, ItemDraft, Status};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`ItemRepository::list`]. Both filters combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQuery {
  /// Lowercased substring matched against title, description and location.
  pub text:   Option<String>,
  pub status: Option<Status>,
}

impl ItemQuery {
  /// Build a query from raw request parameters.
  ///
  /// Text is trimmed and lowercased; blank text disables the text filter.
  /// Any status other than exactly `Lost` or `Found` disables the status
  /// filter rather than failing.
  pub fn from_params(text: Option<&str>, status: Option<&str>) -> Self {
    let text = text
      .map(|t| t.trim().to_lowercase())
      .filter(|t| !t.is_empty());
    let status = status.and_then(|s| s.parse::<Status>().ok());
    Self { text, status }
  }

  /// Whether `item` passes both filters. Backends that cannot push the
  /// predicate into a query use this directly.
  pub fn matches(&self, item: &Item) -> bool {
    if let Some(status) = self.status
      && item.status != status
    {
      return false;
    }
    match &self.text {
      None => true,
      Some(needle) => [&item.title, &item.description, &item.location]
        .iter()
        .any(|field| field.to_lowercase().contains(needle.as_str())),
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the item table.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ItemRepository: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Ensure the backing table exists. Idempotent.
  fn initialize(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Items matching `query`, newest first. Items created within the same
  /// second come back in reverse insertion order.
  fn list<'a>(
    &'a self,
    query: &'a ItemQuery,
  ) -> impl Future<Output = Result<Vec<Item>, Self::Error>> + Send + 'a;

  /// Validate `draft`, then persist it with a fresh id and the current time.
  ///
  /// Validation happens before any I/O: on failure nothing is stored.
  fn create(
    &self,
    draft: ItemDraft,
  ) -> impl Future<Output = Result<Item, Self::Error>> + Send + '_;

  /// Remove the item with `id`. Deleting a missing id is not an error; the
  /// returned flag says whether a row was removed.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}

#[cfg(test)]
mod tests {
  use chrono::Utc;

  use super::*;

  fn item(title: &str, description: &str, location: &str, status: Status) -> Item {
    Item {
      id:          Uuid::new_v4(),
      title:       title.into(),
      description: description.into(),
      status,
      location:    location.into(),
      photo:       None,
      contact:     String::new(),
      created_at:  Utc::now(),
    }
  }

  #[test]
  fn from_params_normalises_text() {
    let q = ItemQuery::from_params(Some("  BackPack "), None);
    assert_eq!(q.text.as_deref(), Some("backpack"));

    let q = ItemQuery::from_params(Some("   "), None);
    assert_eq!(q.text, None);
  }

  #[test]
  fn from_params_ignores_unknown_status() {
    assert_eq!(ItemQuery::from_params(None, Some("Lost")).status, Some(Status::Lost));
    assert_eq!(ItemQuery::from_params(None, Some("")).status, None);
    assert_eq!(ItemQuery::from_params(None, Some("found")).status, None);
    assert_eq!(ItemQuery::from_params(None, Some("All")).status, None);
  }

  #[test]
  fn matches_any_text_field() {
    let i = item("Blue Backpack", "has a red zip", "Gym", Status::Lost);
    for needle in ["backpack", "red", "gym", "blue b"] {
      let q = ItemQuery::from_params(Some(needle), None);
      assert!(q.matches(&i), "{needle} should match");
    }
    assert!(!ItemQuery::from_params(Some("wallet"), None).matches(&i));
  }

  #[test]
  fn matches_folds_non_ascii_case() {
    let i = item("École bag", "", "", Status::Lost);
    for needle in ["École", "ÉCOLE", "école"] {
      assert!(ItemQuery::from_params(Some(needle), None).matches(&i), "{needle}");
    }
  }

  #[test]
  fn matches_combines_with_and() {
    let i = item("Umbrella", "", "Lobby", Status::Found);
    assert!(ItemQuery::from_params(Some("umbrella"), Some("Found")).matches(&i));
    assert!(!ItemQuery::from_params(Some("umbrella"), Some("Lost")).matches(&i));
  }
}

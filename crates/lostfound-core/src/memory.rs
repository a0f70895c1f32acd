//! [`MemoryRepository`]: an in-process [`ItemRepository`] for tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{SubsecRound, Utc};
use uuid::Uuid;

use crate::{
  Error, Result,
  item::{Item, ItemDraft},
  store::{ItemQuery, ItemRepository},
};

/// Items kept in insertion order behind a mutex.
///
/// Cloning is cheap; clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
  items: Arc<Mutex<Vec<Item>>>,
}

impl MemoryRepository {
  pub fn new() -> Self { Self::default() }

  fn items(&self) -> MutexGuard<'_, Vec<Item>> {
    // A panic while holding the lock cannot leave a half-written item behind.
    self.items.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl ItemRepository for MemoryRepository {
  type Error = Error;

  async fn initialize(&self) -> Result<()> { Ok(()) }

  async fn list(&self, query: &ItemQuery) -> Result<Vec<Item>> {
    let items = self.items();
    // Iterating in reverse yields insertion order descending, which breaks
    // ties between equal timestamps; the stable sort keeps it.
    let mut found: Vec<Item> = items
      .iter()
      .rev()
      .filter(|item| query.matches(item))
      .cloned()
      .collect();
    found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(found)
  }

  async fn create(&self, draft: ItemDraft) -> Result<Item> {
    let new = draft.validate()?;
    let item = new.into_item(Uuid::new_v4(), Utc::now().trunc_subsecs(0));
    self.items().push(item.clone());
    Ok(item)
  }

  async fn delete(&self, id: Uuid) -> Result<bool> {
    let mut items = self.items();
    let before = items.len();
    items.retain(|item| item.id != id);
    Ok(items.len() != before)
  }
}

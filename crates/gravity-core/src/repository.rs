use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashSet;

use crate::error::GravityError;
use crate::mock_data;
use crate::models::StreamItem;

/// Storage seam for stream items. Handlers only see this trait, so the
/// in-memory store can be swapped without touching them.
pub trait StreamRepository: Send + Sync {
    /// All items in insertion order
    fn list(&self) -> Vec<StreamItem>;

    fn get(&self, id: &str) -> Option<StreamItem>;

    /// Apply `apply` to the stored item and return the updated copy.
    /// The closure runs exactly once, or not at all if the id is unknown.
    fn update(
        &self,
        id: &str,
        apply: &mut dyn FnMut(&mut StreamItem),
    ) -> Result<StreamItem, GravityError>;
}

/// Process-local store backed by a vector behind a lock
pub struct InMemoryRepository {
    items: RwLock<Vec<StreamItem>>,
}

impl InMemoryRepository {
    /// Duplicate ids are dropped, keeping the first occurrence
    pub fn new(items: Vec<StreamItem>) -> Self {
        let mut seen = HashSet::new();
        let items: Vec<StreamItem> = items
            .into_iter()
            .filter(|item| {
                let fresh = seen.insert(item.id.clone());
                if !fresh {
                    tracing::warn!(item_id = %item.id, "Dropping stream item with duplicate id");
                }
                fresh
            })
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }

    /// Repository seeded with the mock stream relative to `now`
    pub fn with_mock_data(now: DateTime<Utc>) -> Self {
        Self::new(mock_data::stream_items(now))
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl StreamRepository for InMemoryRepository {
    fn list(&self) -> Vec<StreamItem> {
        self.items.read().clone()
    }

    fn get(&self, id: &str) -> Option<StreamItem> {
        self.items.read().iter().find(|item| item.id == id).cloned()
    }

    fn update(
        &self,
        id: &str,
        apply: &mut dyn FnMut(&mut StreamItem),
    ) -> Result<StreamItem, GravityError> {
        let mut items = self.items.write();
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| GravityError::NotFound(id.to_string()))?;
        apply(item);
        Ok(item.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_list_preserve_order() {
        let repo = InMemoryRepository::with_mock_data(Utc::now());
        let ids: Vec<_> = repo.list().into_iter().map(|i| i.id).collect();
        assert_eq!(ids.first().map(String::as_str), Some("item-1"));
        assert_eq!(ids.last().map(String::as_str), Some("item-10"));
        assert_eq!(repo.get("item-4").unwrap().title, "Family Group");
        assert!(repo.get("nope").is_none());
    }

    #[test]
    fn test_update_unknown_id_does_not_run_closure() {
        let repo = InMemoryRepository::with_mock_data(Utc::now());
        let before = repo.list();
        let mut ran = false;
        let result = repo.update("item-404", &mut |_: &mut StreamItem| ran = true);
        assert_eq!(result, Err(GravityError::NotFound("item-404".to_string())));
        assert!(!ran);
        assert_eq!(repo.list(), before);
    }

    #[test]
    fn test_update_persists_mutation() {
        let repo = InMemoryRepository::with_mock_data(Utc::now());
        let updated = repo
            .update("item-1", &mut |item: &mut StreamItem| {
                item.mark_read();
            })
            .unwrap();
        assert!(!updated.unread);
        assert!(!repo.get("item-1").unwrap().unread);
    }

    #[test]
    fn test_duplicate_ids_are_dropped() {
        let mut items = mock_data::stream_items(Utc::now());
        let mut dup = items[0].clone();
        dup.title = "Duplicate".to_string();
        items.push(dup);
        let repo = InMemoryRepository::new(items);
        assert_eq!(repo.len(), 10);
        assert_eq!(repo.get("item-1").unwrap().title, "Q4 Revenue Report - Action Required");
    }
}

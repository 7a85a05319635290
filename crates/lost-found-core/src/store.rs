//! Item Store
//!
//! Owns the board's postings in insertion order. Postings are never removed;
//! the only mutation after insertion is marking one resolved.

use crate::domain::{BoardError, BoardResult, Item, ItemId};
use crate::filter::{filter_and_sort, Criteria};
use crate::seed::seed_items;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the sample postings
    pub fn seeded() -> BoardResult<Self> {
        let mut store = Self::new();
        for item in seed_items()? {
            store.add(item)?;
        }
        Ok(store)
    }

    /// Append an item. Ids must be unique and required fields filled.
    pub fn add(&mut self, item: Item) -> BoardResult<()> {
        item.validate()?;
        if self.contains(item.id()) {
            return Err(BoardError::DuplicateId(item.id().clone()));
        }
        log::debug!("[STORE] Added {} item {}", item.kind().as_str(), item.id());
        self.items.push(item);
        Ok(())
    }

    pub fn find_by_id(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Mark an item resolved. Unknown ids and already-resolved items are
    /// left alone; returns whether anything changed.
    pub fn mark_resolved(&mut self, id: &ItemId) -> bool {
        let changed = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .map(Item::mark_resolved)
            .unwrap_or(false);
        if changed {
            log::info!("[STORE] Item {} resolved", id);
        }
        changed
    }

    /// Filtered view, newest first
    pub fn view(&self, criteria: &Criteria) -> Vec<&Item> {
        filter_and_sort(&self.items, criteria)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

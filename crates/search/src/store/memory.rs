//! In-memory item store
//!
//! Used by tests, demos and the default server configuration. Records are
//! held newest-first; `fail_next` poisons the next read to simulate an
//! outage so error paths stay testable.

use async_trait::async_trait;
use parking_lot::RwLock;

use findit_core::{ItemRecord, ItemStatus, ItemStore, ItemType, StoreError};

/// Seedable in-memory store
#[derive(Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<ItemRecord>>,
    fail_next: RwLock<Option<String>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `items`
    pub fn with_items(items: Vec<ItemRecord>) -> Self {
        let store = Self::new();
        for item in items {
            store.insert(item);
        }
        store
    }

    /// Insert a record, keeping newest-first order
    pub fn insert(&self, item: ItemRecord) {
        let mut items = self.items.write();
        let pos = items
            .iter()
            .position(|existing| existing.created_at < item.created_at)
            .unwrap_or(items.len());
        items.insert(pos, item);
    }

    /// Make the next read fail with the given message
    pub fn fail_next(&self, message: &str) {
        *self.fail_next.write() = Some(message.to_string());
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    fn take_failure(&self) -> Option<String> {
        self.fail_next.write().take()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn fetch_recent(
        &self,
        status: ItemStatus,
        limit: usize,
    ) -> Result<Vec<ItemRecord>, StoreError> {
        if let Some(message) = self.take_failure() {
            return Err(StoreError::Unavailable(message));
        }
        Ok(self
            .items
            .read()
            .iter()
            .filter(|item| item.status == status)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn fetch_by_type(
        &self,
        status: ItemStatus,
        item_type: ItemType,
        limit: usize,
    ) -> Result<Vec<ItemRecord>, StoreError> {
        if let Some(message) = self.take_failure() {
            return Err(StoreError::Unavailable(message));
        }
        Ok(self
            .items
            .read()
            .iter()
            .filter(|item| item.status == status && item.item_type == item_type)
            .take(limit)
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

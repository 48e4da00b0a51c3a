//! Item store trait
//!
//! The item store is an external collaborator: the engine only ever
//! performs filtered, ordered, limited reads against it. A store failure
//! must stay distinguishable from an empty result set, so reads return
//! `Result` and implementations never swallow errors into `Ok(vec![])`.

use async_trait::async_trait;
use thiserror::Error;

use crate::item::{ItemRecord, ItemStatus, ItemType};

/// Item store failures
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store query failed: {0}")]
    Query(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// Read-only access to lost & found listings.
///
/// # Example
///
/// ```ignore
/// let store: Arc<dyn ItemStore> = Arc::new(MemoryItemStore::new());
/// let items = store.fetch_recent(ItemStatus::Active, 50).await?;
/// ```
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Fetch up to `limit` records with the given status, newest first.
    ///
    /// The returned order matters: downstream ranking relies on it as the
    /// recency tie-break.
    async fn fetch_recent(
        &self,
        status: ItemStatus,
        limit: usize,
    ) -> Result<Vec<ItemRecord>, StoreError>;

    /// Fetch up to `limit` records of one listing type, newest first.
    /// Used when pairing a new listing against the opposite side.
    async fn fetch_by_type(
        &self,
        status: ItemStatus,
        item_type: ItemType,
        limit: usize,
    ) -> Result<Vec<ItemRecord>, StoreError>;

    /// Store name for logging
    fn name(&self) -> &str;
}

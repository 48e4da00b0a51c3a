//! Fuzzy item search and ranking
//!
//! Features:
//! - Category synonym expansion for search keywords
//! - Weighted substring scoring across title/description/category/location
//! - Ranked, capped result lists with per-item match reasons
//! - Lost/found cross-listing pair scoring
//! - Item store implementations (in-memory, REST)

pub mod engine;
pub mod expand;
pub mod pairing;
pub mod store;

pub use engine::{SearchEngine, SearchParams, SearchStats};
pub use expand::expand_category;
pub use pairing::{find_pair_candidates, notification_text, pair_score, NotificationKind, PairScore};
pub use store::{MemoryItemStore, RestItemStore, RestStoreConfig};

use thiserror::Error;

use findit_core::StoreError;

/// Search errors
///
/// A store failure is its own variant so callers can distinguish
/// "search ran, nothing matched" from "search could not run".
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

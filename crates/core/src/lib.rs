//! Core traits and types for the FindIt assistant
//!
//! This crate provides the foundational types used across all other crates:
//! - Language definitions and detection (English / Hindi)
//! - Session context round-tripped with the caller on every turn
//! - Intent tags and classification results
//! - Item records, scored results and match presentation types
//! - Collaborator traits (item store, fallback text generator)
//! - Error types

pub mod error;
pub mod intent;
pub mod item;
pub mod language;
pub mod session;
pub mod traits;

pub use error::{CoreError, Result};
pub use intent::{DetectedIntent, Intent, IntentMode};
pub use item::{ItemRecord, ItemStatus, ItemType, MatchResult, RecommendedAction, ScoredItem};
pub use language::Language;
pub use session::{ExtractedInfo, SessionContext};
pub use traits::{ItemStore, StoreError, TextGenerator};

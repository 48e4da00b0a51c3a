//! FindIt conversation engine
//!
//! Features:
//! - Entity extraction over the keyword lexicon
//! - Ordered-rule intent classification with session-aware overrides
//! - Search-backed response composition with localized templates
//! - Bounded generative fallback for unclassified utterances
//!
//! The engine is stateless per call: the caller round-trips the
//! `SessionContext` and the whole turn is a pure function of
//! (context, utterance) plus the collaborator calls it makes.

pub mod assistant;
pub mod extract;
pub mod format;
pub mod intent;

pub use assistant::{Assistant, ChatRequest, ChatTurn, PriorTurn, TurnContext};
pub use extract::EntityExtractor;
pub use format::format_results;
pub use intent::IntentClassifier;

//! Intent tags and classification results

use serde::{Deserialize, Serialize};

/// Conversational intent of one utterance.
///
/// A closed set; callers log and branch on these tags, so variants are
/// never removed or renamed without a wire-format review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Looking for a lost item
    Search,
    /// Reporting a found item
    PostFound,
    /// Browse recent listings
    Browse,
    /// Asking how the assistant works
    Help,
    /// Asking who made the assistant
    Identity,
    Greeting,
    /// Off-limits topic for the general-knowledge mode
    DisallowedTopic,
    /// General-knowledge question outside the lost & found domain
    GeneralQuery,
    /// Short follow-up that supplies only a location
    LocationUpdate,
    /// Closing or removing a listing
    Closure,
    /// Meetup / handover safety guidance
    Safety,
    /// Improving recovery chances
    Recovery,
    /// What to do next
    NextSteps,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Search => "search",
            Intent::PostFound => "post_found",
            Intent::Browse => "browse",
            Intent::Help => "help",
            Intent::Identity => "identity",
            Intent::Greeting => "greeting",
            Intent::DisallowedTopic => "disallowed_topic",
            Intent::GeneralQuery => "general_query",
            Intent::LocationUpdate => "location_update",
            Intent::Closure => "closure",
            Intent::Safety => "safety",
            Intent::Recovery => "recovery",
            Intent::NextSteps => "next_steps",
            Intent::Unknown => "unknown",
        }
    }

    /// Intents answered from canned templates without touching the store
    pub fn is_static(&self) -> bool {
        matches!(
            self,
            Intent::Identity
                | Intent::Greeting
                | Intent::Help
                | Intent::Closure
                | Intent::Safety
                | Intent::Recovery
                | Intent::NextSteps
        )
    }

    /// Transient intents that are never remembered as the session intent
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Intent::Unknown | Intent::LocationUpdate | Intent::GeneralQuery | Intent::DisallowedTopic
        )
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which conversational mode an intent belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentMode {
    /// Lost & found domain
    Primary,
    /// General-knowledge boundary
    Secondary,
}

/// Classification result for one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedIntent {
    pub intent: Intent,
    /// Fixed per classifier rule (0-100); advisory, not thresholded
    pub confidence: u8,
    pub mode: IntentMode,
}

impl DetectedIntent {
    pub fn primary(intent: Intent, confidence: u8) -> Self {
        Self { intent, confidence, mode: IntentMode::Primary }
    }

    pub fn secondary(intent: Intent, confidence: u8) -> Self {
        Self { intent, confidence, mode: IntentMode::Secondary }
    }
}

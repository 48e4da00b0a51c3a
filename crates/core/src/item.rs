//! Item records and match presentation types
//!
//! `ItemRecord` is owned by the item store collaborator; everything here
//! treats it as read-only input. Scored and ranked wrappers are created
//! fresh per search call and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a listing reports a lost or a found item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Lost,
    Found,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Lost => "lost",
            ItemType::Found => "found",
        }
    }

    /// The listing type a match would come from
    pub fn opposite(&self) -> Self {
        match self {
            ItemType::Lost => ItemType::Found,
            ItemType::Found => ItemType::Lost,
        }
    }

    /// Uppercase tag used in rendered result lists
    pub fn tag(&self) -> &'static str {
        match self {
            ItemType::Lost => "LOST",
            ItemType::Found => "FOUND",
        }
    }
}

/// Listing lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Closed,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Closed => "closed",
        }
    }
}

/// A lost-or-found listing as stored by the item store collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    pub item_type: ItemType,
    /// Free-form date the item was lost or found, as reported by the user
    #[serde(default)]
    pub date_lost_found: Option<String>,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

/// An item annotated with a relevance score and the reasons it matched
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: ItemRecord,
    /// Additive integer score from weighted field matches, not a probability
    pub relevance_score: u32,
    /// Ordered, human-readable match explanations
    pub match_reasons: Vec<String>,
}

impl ScoredItem {
    /// Relevance clamped into a 0-100 confidence figure for display
    pub fn confidence(&self) -> u8 {
        self.relevance_score.min(100) as u8
    }
}

/// Caller-facing presentation wrapper for one ranked match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub item: ItemRecord,
    /// 0-100, clamped from the relevance score
    pub confidence: u8,
    pub reasoning: String,
    /// 1-based position in the ranked list
    pub rank: usize,
}

impl MatchResult {
    /// Build the ranked presentation list from scored items
    pub fn from_scored(items: &[ScoredItem]) -> Vec<Self> {
        items
            .iter()
            .enumerate()
            .map(|(i, scored)| MatchResult {
                item: scored.item.clone(),
                confidence: scored.confidence(),
                reasoning: if scored.match_reasons.is_empty() {
                    "Matched by keywords".to_string()
                } else {
                    scored.match_reasons.join(", ")
                },
                rank: i + 1,
            })
            .collect()
    }
}

/// UI affordance hint returned with every turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    ReviewMatches,
    PostItem,
    ProvideLocation,
    ProvideInfo,
    GuideClosure,
    ProvideGuidance,
    SwitchModeOrProvideInfo,
    Retry,
    Continue,
    AwaitInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ItemRecord {
        ItemRecord {
            id: id.to_string(),
            title: "Black iPhone 13".to_string(),
            description: "Found near the gate".to_string(),
            category: "phone".to_string(),
            location: "library".to_string(),
            item_type: ItemType::Found,
            date_lost_found: Some("2026-08-01".to_string()),
            status: ItemStatus::Active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_item_type_opposite() {
        assert_eq!(ItemType::Lost.opposite(), ItemType::Found);
        assert_eq!(ItemType::Found.opposite(), ItemType::Lost);
    }

    #[test]
    fn test_confidence_clamped() {
        let scored = ScoredItem {
            item: record("a"),
            relevance_score: 130,
            match_reasons: vec![],
        };
        assert_eq!(scored.confidence(), 100);
    }

    #[test]
    fn test_match_result_ranks_are_one_based() {
        let scored = vec![
            ScoredItem { item: record("a"), relevance_score: 55, match_reasons: vec!["Title: phone".into()] },
            ScoredItem { item: record("b"), relevance_score: 30, match_reasons: vec![] },
        ];
        let matches = MatchResult::from_scored(&scored);
        assert_eq!(matches[0].rank, 1);
        assert_eq!(matches[1].rank, 2);
        assert_eq!(matches[0].reasoning, "Title: phone");
        assert_eq!(matches[1].reasoning, "Matched by keywords");
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(serde_json::to_string(&ItemStatus::Active).unwrap(), "\"active\"");
    }
}

//! Lost/found cross-listing pairing
//!
//! When a new listing arrives it is scored against active listings of the
//! opposite type; pairs at or above the suggestion threshold are surfaced
//! to both owners.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use findit_core::{ItemRecord, ItemStatus, ItemStore};

use crate::SearchError;

/// Same-category bonus
const CATEGORY_WEIGHT: u32 = 40;
/// Per overlapping location word, capped
const LOCATION_WORD_WEIGHT: u32 = 10;
const LOCATION_CAP: u32 = 25;
/// Bonus when at least two description words overlap
const DESCRIPTION_WEIGHT: u32 = 20;

/// Minimum score for a pair to be suggested
pub const SUGGESTION_THRESHOLD: u32 = 40;

/// Scored lost/found pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairScore {
    /// 0-100
    pub score: u32,
    pub reasoning: String,
    pub text_similarity: u32,
    pub location_proximity: u32,
}

/// Score a lost listing against a found listing.
///
/// Additive: +40 same category, +10 per overlapping location word (words
/// longer than 2 chars, capped at +25), +20 when two or more description
/// words (longer than 3 chars) overlap. Clamped to 100.
pub fn pair_score(lost: &ItemRecord, found: &ItemRecord) -> PairScore {
    let mut score = 0;
    let mut reasons = Vec::new();

    if !lost.category.is_empty()
        && !found.category.is_empty()
        && lost.category.eq_ignore_ascii_case(&found.category)
    {
        score += CATEGORY_WEIGHT;
        reasons.push("Same category");
    }

    if !lost.location.is_empty() && !found.location.is_empty() {
        let found_location = found.location.to_lowercase();
        let lost_location = lost.location.to_lowercase();
        let overlapping = lost_location
            .split_whitespace()
            .filter(|w| w.chars().count() > 2)
            .filter(|w| found_location.contains(*w))
            .count() as u32;
        if overlapping > 0 {
            score += (overlapping * LOCATION_WORD_WEIGHT).min(LOCATION_CAP);
            reasons.push("Similar location");
        }
    }

    if !lost.description.is_empty() && !found.description.is_empty() {
        let found_description = found.description.to_lowercase();
        let lost_description = lost.description.to_lowercase();
        let overlapping = lost_description
            .split_whitespace()
            .filter(|w| w.chars().count() > 3)
            .filter(|w| found_description.contains(*w))
            .count();
        if overlapping >= 2 {
            score += DESCRIPTION_WEIGHT;
            reasons.push("Similar description");
        }
    }

    let score = score.min(100);

    PairScore {
        score,
        reasoning: if reasons.is_empty() {
            "Low similarity".to_string()
        } else {
            reasons.join(", ")
        },
        text_similarity: score,
        location_proximity: if score > 25 { 80 } else { 50 },
    }
}

/// Scan active listings of the opposite type and keep pairs at or above
/// the suggestion threshold, sorted by score descending.
pub async fn find_pair_candidates(
    store: &Arc<dyn ItemStore>,
    item: &ItemRecord,
    limit: usize,
) -> Result<Vec<(ItemRecord, PairScore)>, SearchError> {
    let candidates = store
        .fetch_by_type(ItemStatus::Active, item.item_type.opposite(), limit)
        .await?;

    let mut pairs: Vec<(ItemRecord, PairScore)> = candidates
        .into_iter()
        .map(|candidate| {
            let score = match item.item_type {
                findit_core::ItemType::Lost => pair_score(item, &candidate),
                findit_core::ItemType::Found => pair_score(&candidate, item),
            };
            (candidate, score)
        })
        .filter(|(_, score)| score.score >= SUGGESTION_THRESHOLD)
        .collect();

    pairs.sort_by(|a, b| b.1.score.cmp(&a.1.score));
    Ok(pairs)
}

/// Notification event kinds for pairing outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PotentialMatch,
    NewClaim,
}

/// Build the user-facing notification title and message for an event
pub fn notification_text(
    kind: NotificationKind,
    item_title: Option<&str>,
    match_title: Option<&str>,
) -> (String, String) {
    match kind {
        NotificationKind::PotentialMatch => (
            "Potential Match Found!".to_string(),
            format!(
                "A {} might match your {}.",
                match_title.unwrap_or("similar item"),
                item_title.unwrap_or("item"),
            ),
        ),
        NotificationKind::NewClaim => (
            "New Claim Received".to_string(),
            format!("Someone has claimed your {}.", item_title.unwrap_or("item")),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryItemStore;
    use chrono::Utc;
    use findit_core::ItemType;

    fn listing(id: &str, item_type: ItemType, category: &str, location: &str, desc: &str) -> ItemRecord {
        ItemRecord {
            id: id.to_string(),
            title: format!("{category} listing"),
            description: desc.to_string(),
            category: category.to_string(),
            location: location.to_string(),
            item_type,
            date_lost_found: None,
            status: ItemStatus::Active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_same_category_scores() {
        let lost = listing("l", ItemType::Lost, "wallet", "", "");
        let found = listing("f", ItemType::Found, "wallet", "", "");
        let score = pair_score(&lost, &found);
        assert_eq!(score.score, 40);
        assert_eq!(score.reasoning, "Same category");
    }

    #[test]
    fn test_location_overlap_capped() {
        let lost = listing("l", ItemType::Lost, "bag", "andheri west metro station gate", "");
        let found = listing("f", ItemType::Found, "bag", "andheri west metro station gate", "");
        let score = pair_score(&lost, &found);
        // 40 category + location capped at 25
        assert_eq!(score.score, 65);
        assert!(score.reasoning.contains("Similar location"));
    }

    #[test]
    fn test_description_needs_two_overlapping_words() {
        let lost = listing("l", ItemType::Lost, "", "", "black leather cover scratched");
        let one = listing("f", ItemType::Found, "", "", "leather strap");
        assert_eq!(pair_score(&lost, &one).score, 0);

        let two = listing("f2", ItemType::Found, "", "", "black-ish leather cover");
        let score = pair_score(&lost, &two);
        assert_eq!(score.score, 20);
        assert!(score.reasoning.contains("Similar description"));
    }

    #[test]
    fn test_no_similarity_reasoning() {
        let lost = listing("l", ItemType::Lost, "phone", "library", "");
        let found = listing("f", ItemType::Found, "wallet", "canteen", "");
        let score = pair_score(&lost, &found);
        assert_eq!(score.score, 0);
        assert_eq!(score.reasoning, "Low similarity");
        assert_eq!(score.location_proximity, 50);
    }

    #[tokio::test]
    async fn test_find_pair_candidates_filters_and_sorts() {
        let store: Arc<dyn ItemStore> = Arc::new(MemoryItemStore::with_items(vec![
            listing("strong", ItemType::Found, "wallet", "andheri station", ""),
            listing("weak", ItemType::Found, "phone", "dadar", ""),
            listing("same_type", ItemType::Lost, "wallet", "andheri station", ""),
        ]));
        let lost = listing("l", ItemType::Lost, "wallet", "andheri station", "");

        let pairs = find_pair_candidates(&store, &lost, 20).await.unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.id, "strong");
        assert!(pairs[0].1.score >= SUGGESTION_THRESHOLD);
    }

    #[test]
    fn test_notification_text() {
        let (title, message) = notification_text(
            NotificationKind::PotentialMatch,
            Some("black wallet"),
            Some("brown wallet"),
        );
        assert_eq!(title, "Potential Match Found!");
        assert!(message.contains("brown wallet"));
        assert!(message.contains("black wallet"));

        let (title, _) = notification_text(NotificationKind::NewClaim, None, None);
        assert_eq!(title, "New Claim Received");
    }
}

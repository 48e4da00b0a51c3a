//! Search engine: candidate fetch, weighted scoring, ranking
//!
//! The candidate universe is a single capped fetch of the most recent
//! active records (50); the engine does not paginate past that cap.
//! Candidates arrive newest-first and the descending sort is stable, so
//! score ties keep recency order.

use std::sync::Arc;

use parking_lot::Mutex;

use findit_config::Lexicon;
use findit_core::{ItemStatus, ItemStore, ScoredItem};

use crate::expand::expand_category;
use crate::SearchError;

/// Scoring weights. Each field check is independent: one term can score
/// on several fields at once, and every expanded term contributes.
const TITLE_WEIGHT: u32 = 30;
const DESCRIPTION_WEIGHT: u32 = 20;
const CATEGORY_WEIGHT: u32 = 25;
const LOCATION_WEIGHT: u32 = 25;
const LOCATION_PARTIAL_WEIGHT: u32 = 10;

/// Candidate fetch cap; the entire search universe per call.
const CANDIDATE_LIMIT: usize = 50;
/// Ranked results returned per call.
const RESULT_LIMIT: usize = 10;

/// Search parameters for one call
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub status: ItemStatus,
}

/// Per-engine counters, injected rather than process-global so the engine
/// stays pure and testable.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Search calls served
    pub total_calls: usize,
    /// Candidates scored across all calls
    pub total_candidates: usize,
    /// Results returned across all calls
    pub total_matches: usize,
    /// Calls that failed at the store
    pub store_errors: usize,
}

/// Fuzzy search and ranking over the item store
pub struct SearchEngine {
    store: Arc<dyn ItemStore>,
    lexicon: Arc<Lexicon>,
    stats: Mutex<SearchStats>,
}

impl SearchEngine {
    pub fn new(store: Arc<dyn ItemStore>, lexicon: Arc<Lexicon>) -> Self {
        Self {
            store,
            lexicon,
            stats: Mutex::new(SearchStats::default()),
        }
    }

    /// Run one search: expand the keyword, fetch candidates, score, rank.
    ///
    /// A store failure is returned as an error, never as an empty result
    /// list.
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<ScoredItem>, SearchError> {
        let terms = params
            .keyword
            .as_deref()
            .map(|kw| expand_category(&self.lexicon, kw))
            .unwrap_or_default();

        tracing::debug!(
            keyword = params.keyword.as_deref().unwrap_or(""),
            location = params.location.as_deref().unwrap_or(""),
            expanded = terms.len(),
            "search"
        );

        let candidates = match self.store.fetch_recent(params.status, CANDIDATE_LIMIT).await {
            Ok(items) => items,
            Err(e) => {
                self.stats.lock().store_errors += 1;
                tracing::warn!(store = self.store.name(), error = %e, "store query failed");
                return Err(e.into());
            }
        };

        let candidate_count = candidates.len();

        let mut scored: Vec<ScoredItem> = candidates
            .into_iter()
            .map(|item| {
                let (score, reasons) = score_item(&terms, params.location.as_deref(), &item);
                ScoredItem { item, relevance_score: score, match_reasons: reasons }
            })
            .filter(|scored| scored.relevance_score > 0)
            .collect();

        // Stable sort: ties keep the store's newest-first order
        scored.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        scored.truncate(RESULT_LIMIT);

        let mut stats = self.stats.lock();
        stats.total_calls += 1;
        stats.total_candidates += candidate_count;
        stats.total_matches += scored.len();

        Ok(scored)
    }

    pub fn stats(&self) -> SearchStats {
        self.stats.lock().clone()
    }

    pub fn reset_stats(&self) {
        *self.stats.lock() = SearchStats::default();
    }

    pub fn store(&self) -> &Arc<dyn ItemStore> {
        &self.store
    }
}

/// Score one candidate against the expanded terms and location query
fn score_item(
    terms: &[String],
    location: Option<&str>,
    item: &findit_core::ItemRecord,
) -> (u32, Vec<String>) {
    let mut score = 0;
    let mut reasons = Vec::new();

    let title = item.title.to_lowercase();
    let description = item.description.to_lowercase();
    let category = item.category.to_lowercase();
    let item_location = item.location.to_lowercase();

    for term in terms {
        if title.contains(term.as_str()) {
            score += TITLE_WEIGHT;
            reasons.push(format!("Title: {term}"));
        }
        if description.contains(term.as_str()) {
            score += DESCRIPTION_WEIGHT;
            reasons.push(format!("Desc: {term}"));
        }
        if category.contains(term.as_str()) {
            score += CATEGORY_WEIGHT;
            reasons.push(format!("Category: {term}"));
        }
    }

    if let Some(location) = location {
        let query = location.to_lowercase();
        for word in query.split_whitespace().filter(|w| w.chars().count() > 2) {
            if item_location.contains(word) {
                score += LOCATION_WEIGHT;
                reasons.push(format!("Location: {word}"));
            } else if prefix_overlap(word, &item_location) {
                // Deliberately loose partial fallback on a 3-char prefix
                score += LOCATION_PARTIAL_WEIGHT;
                reasons.push(format!("Location partial: {word}"));
            }
        }
    }

    (score, reasons)
}

/// Weak partial match: either string starts with the other's first three
/// characters. Char-based so Devanagari location names do not split bytes.
fn prefix_overlap(word: &str, location: &str) -> bool {
    if word.is_empty() || location.is_empty() {
        return false;
    }
    let word_prefix: String = word.chars().take(3).collect();
    let location_prefix: String = location.chars().take(3).collect();
    location.starts_with(&word_prefix) || word.starts_with(&location_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryItemStore;
    use chrono::{Duration, Utc};
    use findit_core::{ItemRecord, ItemType};

    fn item(id: &str, title: &str, desc: &str, category: &str, location: &str, age_mins: i64) -> ItemRecord {
        ItemRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: desc.to_string(),
            category: category.to_string(),
            location: location.to_string(),
            item_type: ItemType::Found,
            date_lost_found: None,
            status: ItemStatus::Active,
            created_at: Utc::now() - Duration::minutes(age_mins),
        }
    }

    fn engine_with(items: Vec<ItemRecord>) -> SearchEngine {
        let store = Arc::new(MemoryItemStore::with_items(items));
        SearchEngine::new(store, Arc::new(Lexicon::default()))
    }

    #[tokio::test]
    async fn test_zero_score_items_filtered() {
        let engine = engine_with(vec![
            item("a", "Black iPhone", "near gate", "phone", "library", 1),
            item("b", "Red umbrella", "left in rain", "umbrella", "canteen", 2),
        ]);
        let results = engine
            .search(&SearchParams { keyword: Some("phone".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.id, "a");
    }

    #[tokio::test]
    async fn test_synonym_expansion_reaches_title() {
        // "mobile" must match an item titled "iPhone" via expansion
        let engine = engine_with(vec![item("a", "iPhone 13 found", "", "phone", "gate", 1)]);
        let results = engine
            .search(&SearchParams { keyword: Some("mobile".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].relevance_score >= TITLE_WEIGHT);
    }

    #[tokio::test]
    async fn test_more_matching_terms_score_higher() {
        let engine = engine_with(vec![
            item("both", "phone found", "a mobile phone", "phone", "", 1),
            item("title_only", "phone found", "no details", "misc", "", 2),
        ]);
        let results = engine
            .search(&SearchParams { keyword: Some("phone".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(results[0].item.id, "both");
        assert!(results[0].relevance_score > results[1].relevance_score);
    }

    #[tokio::test]
    async fn test_location_exact_and_partial() {
        let engine = engine_with(vec![
            item("exact", "wallet", "", "wallet", "andheri station", 1),
            item("partial", "wallet", "", "wallet", "stadium road", 2),
        ]);
        let results = engine
            .search(&SearchParams {
                keyword: Some("wallet".into()),
                location: Some("station".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(results[0].item.id, "exact");
        assert!(results[0]
            .match_reasons
            .iter()
            .any(|r| r.starts_with("Location: station")));
        assert!(results[1]
            .match_reasons
            .iter()
            .any(|r| r.starts_with("Location partial: station")));
        assert_eq!(
            results[0].relevance_score,
            results[1].relevance_score + LOCATION_WEIGHT - LOCATION_PARTIAL_WEIGHT
        );
    }

    #[tokio::test]
    async fn test_short_location_tokens_ignored() {
        let engine = engine_with(vec![item("a", "wallet", "", "wallet", "b2 block", 1)]);
        let results = engine
            .search(&SearchParams {
                keyword: Some("wallet".into()),
                location: Some("b2 block".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        // "b2" (len 2) contributes nothing; "block" matches
        assert!(results[0].match_reasons.iter().all(|r| !r.contains("b2")));
        assert!(results[0].match_reasons.iter().any(|r| r.contains("block")));
    }

    #[tokio::test]
    async fn test_cap_and_tie_recency_order() {
        let mut items = Vec::new();
        for i in 0..15 {
            items.push(item(&format!("i{i}"), "phone", "", "phone", "", i as i64));
        }
        let engine = engine_with(items);
        let results = engine
            .search(&SearchParams { keyword: Some("phone".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(results.len(), 10);
        // Equal scores: newest-first order preserved by the stable sort
        assert_eq!(results[0].item.id, "i0");
        assert_eq!(results[9].item.id, "i9");
    }

    #[tokio::test]
    async fn test_no_keyword_no_location_returns_empty() {
        let engine = engine_with(vec![item("a", "phone", "", "phone", "", 1)]);
        let results = engine.search(&SearchParams::default()).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_store_error_is_not_empty_ok() {
        let store = Arc::new(MemoryItemStore::new());
        store.fail_next("connection refused");
        let engine = SearchEngine::new(store, Arc::new(Lexicon::default()));
        let err = engine
            .search(&SearchParams { keyword: Some("phone".into()), ..Default::default() })
            .await;
        assert!(matches!(err, Err(SearchError::Store(_))));
        assert_eq!(engine.stats().store_errors, 1);
    }

    #[tokio::test]
    async fn test_stats_accumulate() {
        let engine = engine_with(vec![item("a", "phone", "", "phone", "", 1)]);
        let _ = engine
            .search(&SearchParams { keyword: Some("phone".into()), ..Default::default() })
            .await
            .unwrap();
        let stats = engine.stats();
        assert_eq!(stats.total_calls, 1);
        assert_eq!(stats.total_candidates, 1);
        assert_eq!(stats.total_matches, 1);
        engine.reset_stats();
        assert_eq!(engine.stats().total_calls, 0);
    }

    #[test]
    fn test_prefix_overlap() {
        assert!(prefix_overlap("andheri", "andheri east"));
        assert!(prefix_overlap("anand", "andheri"));
        assert!(!prefix_overlap("dadar", "andheri"));
        assert!(!prefix_overlap("", "andheri"));
    }
}

//! Entity extraction
//!
//! Pulls structured fields out of a single utterance by scanning the
//! lexicon tables. Every scan is first-match-wins in table order; the
//! order is the tie-break policy. Extraction is a pure function of the
//! input text, so calling it twice yields identical results.

use once_cell::sync::Lazy;
use regex::Regex;

use findit_config::Lexicon;
use findit_core::ExtractedInfo;

/// Leading prepositions stripped from a captured location phrase
static LOCATION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(in|at|near)\s+").unwrap());
/// Trailing lost/found verb forms stripped from a captured location phrase
static LOCATION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+(lost|found|mila|kho)$").unwrap());

static DATE_YESTERDAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)yesterday|kal").unwrap());
static DATE_TODAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)today|aaj|abhi").unwrap());

/// Extracts category, location, color, brand and relative date from an
/// utterance. Location patterns are compiled once at construction.
pub struct EntityExtractor {
    lexicon: std::sync::Arc<Lexicon>,
    /// One context-capture regex per location noun, in table order
    location_patterns: Vec<(String, Regex)>,
}

impl EntityExtractor {
    pub fn new(lexicon: std::sync::Arc<Lexicon>) -> Self {
        let location_patterns = lexicon
            .location_keywords
            .iter()
            .map(|noun| {
                // Bounded context window around the noun; the captured
                // phrase keeps up to 10 chars of surrounding words.
                let pattern = format!(r"(?i)([\w\s]{{0,10}})?{}([\w\s]{{0,10}})?", regex::escape(noun));
                (noun.clone(), Regex::new(&pattern).expect("location pattern"))
            })
            .collect();

        Self { lexicon, location_patterns }
    }

    /// Run one extraction pass. The returned `info_score` counts every
    /// populated field, including the relative date.
    pub fn extract(&self, message: &str) -> ExtractedInfo {
        let lower = message.to_lowercase();
        let mut info = ExtractedInfo::default();

        // Category: first table entry with a keyword hit wins
        'category: for entry in &self.lexicon.item_keywords {
            for keyword in &entry.keywords {
                if lower.contains(keyword.as_str()) {
                    info.category = Some(entry.canonical.clone());
                    info.item_name = Some(keyword.clone());
                    info.info_score += 1;
                    break 'category;
                }
            }
        }

        // Location: first noun hit wins; capture a small context window
        // then strip leading prepositions and trailing lost/found verbs
        for (noun, pattern) in &self.location_patterns {
            if lower.contains(noun.as_str()) {
                if let Some(found) = pattern.find(message) {
                    let phrase = found.as_str().trim();
                    let phrase = LOCATION_PREFIX.replace(phrase, "");
                    let phrase = LOCATION_SUFFIX.replace(&phrase, "");
                    info.location = Some(phrase.trim().to_string());
                    info.info_score += 1;
                }
                break;
            }
        }

        if let Some(color) = Lexicon::first_in(&self.lexicon.colors, &lower) {
            info.color = Some(color.to_string());
            info.info_score += 1;
        }

        if let Some(brand) = Lexicon::first_in(&self.lexicon.brands, &lower) {
            info.brand = Some(brand.to_string());
            info.info_score += 1;
        }

        // Relative date only; no absolute date parsing
        if DATE_YESTERDAY.is_match(message) {
            info.date = Some("yesterday".to_string());
            info.info_score += 1;
        } else if DATE_TODAY.is_match(message) {
            info.date = Some("today".to_string());
            info.info_score += 1;
        }

        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn extractor() -> EntityExtractor {
        EntityExtractor::new(Arc::new(Lexicon::default()))
    }

    #[test]
    fn test_full_extraction() {
        let info = extractor().extract("lost my black iPhone near the library yesterday");
        assert_eq!(info.category.as_deref(), Some("phone"));
        assert_eq!(info.item_name.as_deref(), Some("iphone"));
        assert_eq!(info.color.as_deref(), Some("black"));
        // "iphone" sits in the brand table too and is the first hit
        assert_eq!(info.brand.as_deref(), Some("iphone"));
        assert!(info.location.as_deref().unwrap_or("").contains("library"));
        assert_eq!(info.date.as_deref(), Some("yesterday"));
        assert!(info.info_score >= 4);
    }

    #[test]
    fn test_found_wallet_at_bus_stop() {
        let info = extractor().extract("found a wallet at the bus stop");
        assert_eq!(info.category.as_deref(), Some("wallet"));
        assert!(info.location.as_deref().unwrap_or("").contains("bus stop"));
    }

    #[test]
    fn test_location_strips_preposition() {
        let info = extractor().extract("in library");
        let location = info.location.unwrap();
        assert!(!location.to_lowercase().starts_with("in "));
        assert!(location.contains("library"));
    }

    #[test]
    fn test_location_strips_trailing_verb() {
        let info = extractor().extract("canteen kho");
        let location = info.location.unwrap();
        assert!(!location.ends_with("kho"));
        assert!(location.contains("canteen"));
    }

    #[test]
    fn test_category_first_match_order() {
        // "phone" appears before "bag" in the table, so a message with
        // both picks phone
        let info = extractor().extract("my phone was in the bag");
        assert_eq!(info.category.as_deref(), Some("phone"));
    }

    #[test]
    fn test_date_yesterday_wins_over_today() {
        let info = extractor().extract("kal ya aaj");
        assert_eq!(info.date.as_deref(), Some("yesterday"));
    }

    #[test]
    fn test_info_score_counts_date() {
        let info = extractor().extract("lost it yesterday");
        assert_eq!(info.info_score, 1);
        assert_eq!(info.date.as_deref(), Some("yesterday"));
    }

    #[test]
    fn test_nothing_extracted() {
        let info = extractor().extract("hmm okay");
        assert!(info.is_empty());
        assert_eq!(info.info_score, 0);
    }

    #[test]
    fn test_idempotent() {
        let ex = extractor();
        let message = "lost my black iPhone near the library yesterday";
        assert_eq!(ex.extract(message), ex.extract(message));
    }
}

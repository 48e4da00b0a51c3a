//! Intent classification
//!
//! An ordered decision list: the first matching rule wins and there is no
//! backtracking. Confidence values are fixed per rule and advisory only,
//! but callers log them, so they are part of the compatibility surface.

use unicode_segmentation::UnicodeSegmentation;

use findit_config::Lexicon;
use findit_core::{DetectedIntent, Intent, SessionContext};

/// Classifies utterances against the keyword lexicon
pub struct IntentClassifier {
    lexicon: std::sync::Arc<Lexicon>,
}

impl IntentClassifier {
    pub fn new(lexicon: std::sync::Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Classify one utterance, optionally against accumulated session
    /// state (used for the short location-only follow-up override).
    pub fn classify(
        &self,
        message: &str,
        session: Option<&SessionContext>,
    ) -> DetectedIntent {
        let lower = message.to_lowercase().trim().to_string();
        let word_count = lower.unicode_words().count();
        let lex = &*self.lexicon;

        // Context override: a short follow-up that names a location, when
        // the conversation already fixed a category but no location yet
        if let Some(ctx) = session {
            if ctx.intent.is_some() && ctx.category.is_some() && ctx.location.is_none() {
                let is_just_location =
                    Lexicon::any_in(&lex.location_keywords, &lower) && word_count <= 4;
                if is_just_location {
                    return DetectedIntent::primary(Intent::LocationUpdate, 90);
                }
            }
        }

        // Hard boundary: disallowed topics dominate every domain signal
        if Lexicon::any_in(&lex.disallowed_topics, &lower) {
            return DetectedIntent::secondary(Intent::DisallowedTopic, 95);
        }

        if Lexicon::any_in(&lex.identity_keywords, &lower) {
            return DetectedIntent::primary(Intent::Identity, 100);
        }

        // Investigator intents, checked in this fixed order
        if Lexicon::any_in(&lex.closure_keywords, &lower) {
            return DetectedIntent::primary(Intent::Closure, 85);
        }
        if Lexicon::any_in(&lex.safety_keywords, &lower) {
            return DetectedIntent::primary(Intent::Safety, 85);
        }
        if Lexicon::any_in(&lex.recovery_keywords, &lower) {
            return DetectedIntent::primary(Intent::Recovery, 80);
        }
        if Lexicon::any_in(&lex.next_steps_keywords, &lower) {
            return DetectedIntent::primary(Intent::NextSteps, 80);
        }

        if word_count <= 3 && lex.greeting_keywords.iter().any(|kw| lower.starts_with(kw.as_str())) {
            return DetectedIntent::primary(Intent::Greeting, 90);
        }
        if Lexicon::any_in(&lex.browse_keywords, &lower) {
            return DetectedIntent::primary(Intent::Browse, 80);
        }
        if Lexicon::any_in(&lex.help_keywords, &lower) {
            return DetectedIntent::primary(Intent::Help, 70);
        }

        // Lost vs found tally: +2 per keyword hit on each side
        let mut lost_score = 0u32;
        let mut found_score = 0u32;
        for kw in &lex.lost_keywords {
            if lower.contains(kw.as_str()) {
                lost_score += 2;
            }
        }
        for kw in &lex.found_keywords {
            if lower.contains(kw.as_str()) {
                found_score += 2;
            }
        }

        let has_item = lex
            .item_keywords
            .iter()
            .any(|entry| entry.keywords.iter().any(|kw| lower.contains(kw.as_str())));
        // Item keywords tilt the tally toward the lost side only: an
        // ambiguous item mention is treated as someone searching, not
        // posting. Asymmetric on purpose, pending product clarification.
        if has_item {
            lost_score += 1;
        }

        if lost_score > found_score && lost_score > 0 {
            return DetectedIntent::primary(Intent::Search, 80);
        }
        if found_score > lost_score && found_score > 0 {
            return DetectedIntent::primary(Intent::PostFound, 80);
        }
        if has_item {
            return DetectedIntent::primary(Intent::Search, 60);
        }

        if Lexicon::any_in(&lex.general_knowledge_keywords, &lower) {
            return DetectedIntent::secondary(Intent::GeneralQuery, 60);
        }

        // A question with no lost/found/item signal is a likely
        // general-knowledge query, at lower confidence
        if is_question(&lower) && !has_item && lost_score == 0 && found_score == 0 {
            return DetectedIntent::secondary(Intent::GeneralQuery, 50);
        }

        DetectedIntent::primary(Intent::Unknown, 0)
    }
}

/// Question shape: contains `?` or starts with a question word
pub(crate) fn is_question(lower: &str) -> bool {
    lower.contains('?')
        || lower.starts_with("what")
        || lower.starts_with("why")
        || lower.starts_with("how")
        || lower.starts_with("explain")
}

#[cfg(test)]
mod tests {
    use super::*;
    use findit_core::IntentMode;
    use std::sync::Arc;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new(Arc::new(Lexicon::default()))
    }

    fn session_with_category() -> SessionContext {
        let mut ctx = SessionContext::default();
        ctx.intent = Some(Intent::Search);
        ctx.category = Some("wallet".into());
        ctx.recompute_info_score();
        ctx
    }

    #[test]
    fn test_lost_keyword_is_search() {
        let detected = classifier().classify("I lost my wallet", None);
        assert_eq!(detected.intent, Intent::Search);
        assert_eq!(detected.confidence, 80);
        assert_eq!(detected.mode, IntentMode::Primary);
    }

    #[test]
    fn test_found_keyword_is_post_found() {
        let detected = classifier().classify("found a wallet at the bus stop", None);
        assert_eq!(detected.intent, Intent::PostFound);
    }

    #[test]
    fn test_bare_item_defaults_to_search() {
        // No lost/found verb at all; the item bias alone tips the tally
        let detected = classifier().classify("blue umbrella", None);
        assert_eq!(detected.intent, Intent::Search);
        assert_eq!(detected.confidence, 80);
    }

    #[test]
    fn test_disallowed_dominates_domain_keywords() {
        // Both a lost keyword and an item keyword present; disallowed wins
        let detected = classifier().classify("lost my phone, also what about politics", None);
        assert_eq!(detected.intent, Intent::DisallowedTopic);
        assert_eq!(detected.mode, IntentMode::Secondary);
        assert_eq!(detected.confidence, 95);
    }

    #[test]
    fn test_identity() {
        let detected = classifier().classify("who made this", None);
        assert_eq!(detected.intent, Intent::Identity);
        assert_eq!(detected.confidence, 100);
    }

    #[test]
    fn test_greeting_needs_short_utterance() {
        let detected = classifier().classify("hello there", None);
        assert_eq!(detected.intent, Intent::Greeting);

        // Too long to be a bare greeting; "lost" wins
        let detected = classifier().classify("hello i think i lost my phone yesterday", None);
        assert_eq!(detected.intent, Intent::Search);
    }

    #[test]
    fn test_location_update_override() {
        let ctx = session_with_category();
        let detected = classifier().classify("andheri station", Some(&ctx));
        assert_eq!(detected.intent, Intent::LocationUpdate);
        assert_eq!(detected.confidence, 90);
    }

    #[test]
    fn test_location_update_needs_short_utterance() {
        let ctx = session_with_category();
        let detected = classifier()
            .classify("i was walking around andheri station all evening with friends", Some(&ctx));
        assert_ne!(detected.intent, Intent::LocationUpdate);
    }

    #[test]
    fn test_location_update_needs_missing_location() {
        let mut ctx = session_with_category();
        ctx.location = Some("dadar".into());
        let detected = classifier().classify("andheri station", Some(&ctx));
        assert_ne!(detected.intent, Intent::LocationUpdate);
    }

    #[test]
    fn test_investigator_intents_in_order() {
        let c = classifier();
        assert_eq!(c.classify("close my listing", None).intent, Intent::Closure);
        assert_eq!(c.classify("is it safe to meet", None).intent, Intent::Safety);
        assert_eq!(c.classify("tips please", None).intent, Intent::Recovery);
        assert_eq!(c.classify("ab kya karna chahiye", None).intent, Intent::NextSteps);
    }

    #[test]
    fn test_browse() {
        assert_eq!(classifier().classify("dikhao recent items", None).intent, Intent::Browse);
    }

    #[test]
    fn test_general_query_keyword() {
        let detected = classifier().classify("explain photosynthesis", None);
        assert_eq!(detected.intent, Intent::GeneralQuery);
        assert_eq!(detected.mode, IntentMode::Secondary);
        assert_eq!(detected.confidence, 60);
    }

    #[test]
    fn test_question_shape_fallback() {
        let detected = classifier().classify("is the moon full tonight?", None);
        assert_eq!(detected.intent, Intent::GeneralQuery);
        assert_eq!(detected.confidence, 50);
    }

    #[test]
    fn test_unknown() {
        let detected = classifier().classify("hmm okay then", None);
        assert_eq!(detected.intent, Intent::Unknown);
        assert_eq!(detected.confidence, 0);
    }
}

//! Session context round-tripped with the caller
//!
//! The engine holds no per-conversation state. The caller supplies the
//! previous `SessionContext` on every turn and receives the updated one
//! back; durable retention and expiry are the caller's responsibility.

use serde::{Deserialize, Serialize};

use crate::intent::Intent;
use crate::item::ItemType;

/// Accumulated conversational memory for one conversation.
///
/// Serialized in camelCase to match the wire contract callers already
/// persist between turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionContext {
    /// Last confirmed non-transient intent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    /// Count of non-empty values among {category, location, color, brand}.
    /// Recomputed from those fields every turn, never hand-incremented.
    pub info_score: u8,
    /// Monotonically incrementing turn counter
    pub conversation_turn: u32,
}

impl SessionContext {
    /// Start a new turn: bump the turn counter.
    pub fn begin_turn(&mut self) {
        self.conversation_turn += 1;
    }

    /// Merge one utterance's extraction into the accumulated context.
    ///
    /// Later non-empty values overwrite; extraction never clears a
    /// previously set field. Recomputes `info_score` afterwards.
    pub fn absorb(&mut self, extracted: &ExtractedInfo) {
        if extracted.category.is_some() {
            self.category = extracted.category.clone();
        }
        if extracted.item_name.is_some() {
            self.item_name = extracted.item_name.clone();
        }
        if extracted.location.is_some() {
            self.location = extracted.location.clone();
        }
        if extracted.color.is_some() {
            self.color = extracted.color.clone();
        }
        if extracted.brand.is_some() {
            self.brand = extracted.brand.clone();
        }
        if extracted.date.is_some() {
            self.date = extracted.date.clone();
        }
        self.recompute_info_score();
    }

    /// Recompute `info_score` from the fields it summarizes.
    ///
    /// Date is deliberately not counted here, unlike the per-utterance
    /// score on [`ExtractedInfo`].
    pub fn recompute_info_score(&mut self) {
        self.info_score = [
            self.category.is_some(),
            self.location.is_some(),
            self.color.is_some(),
            self.brand.is_some(),
        ]
        .iter()
        .filter(|b| **b)
        .count() as u8;
    }

    /// Whether any field useful for narrowing a search is known
    pub fn has_any_info(&self) -> bool {
        self.category.is_some() || self.location.is_some() || self.color.is_some()
    }

    /// Preferred search keyword: the literal item name if one was heard,
    /// otherwise the canonical category.
    pub fn search_keyword(&self) -> Option<&str> {
        self.item_name.as_deref().or(self.category.as_deref())
    }
}

/// Output of one extraction pass over a single utterance.
///
/// `info_score` here counts every populated field including `date`; the
/// session-level score excludes date. Both behaviors are pinned by tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Count of fields this utterance alone contributed
    pub info_score: u8,
}

impl ExtractedInfo {
    /// Whether the pass pulled anything out of the utterance
    pub fn is_empty(&self) -> bool {
        self.info_score == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb_overwrites_nonempty_only() {
        let mut ctx = SessionContext::default();
        ctx.absorb(&ExtractedInfo {
            category: Some("wallet".into()),
            item_name: Some("wallet".into()),
            info_score: 1,
            ..Default::default()
        });
        assert_eq!(ctx.category.as_deref(), Some("wallet"));
        assert_eq!(ctx.info_score, 1);

        // A later extraction without a category must not clear it
        ctx.absorb(&ExtractedInfo {
            location: Some("andheri station".into()),
            info_score: 1,
            ..Default::default()
        });
        assert_eq!(ctx.category.as_deref(), Some("wallet"));
        assert_eq!(ctx.location.as_deref(), Some("andheri station"));
        assert_eq!(ctx.info_score, 2);
    }

    #[test]
    fn test_info_score_excludes_date() {
        let mut ctx = SessionContext::default();
        ctx.absorb(&ExtractedInfo {
            category: Some("phone".into()),
            date: Some("yesterday".into()),
            info_score: 2,
            ..Default::default()
        });
        // Date is merged but does not count toward the session score
        assert_eq!(ctx.date.as_deref(), Some("yesterday"));
        assert_eq!(ctx.info_score, 1);
    }

    #[test]
    fn test_info_score_holds_after_any_sequence() {
        let mut ctx = SessionContext::default();
        let passes = [
            ExtractedInfo { color: Some("black".into()), info_score: 1, ..Default::default() },
            ExtractedInfo { brand: Some("apple".into()), info_score: 1, ..Default::default() },
            ExtractedInfo { color: Some("blue".into()), info_score: 1, ..Default::default() },
            ExtractedInfo::default(),
        ];
        for pass in &passes {
            ctx.absorb(pass);
            let expected = [
                ctx.category.is_some(),
                ctx.location.is_some(),
                ctx.color.is_some(),
                ctx.brand.is_some(),
            ]
            .iter()
            .filter(|b| **b)
            .count() as u8;
            assert_eq!(ctx.info_score, expected);
        }
        assert_eq!(ctx.color.as_deref(), Some("blue"));
    }

    #[test]
    fn test_turn_counter() {
        let mut ctx = SessionContext::default();
        ctx.begin_turn();
        ctx.begin_turn();
        assert_eq!(ctx.conversation_turn, 2);
    }

    #[test]
    fn test_search_keyword_prefers_item_name() {
        let mut ctx = SessionContext::default();
        ctx.category = Some("phone".into());
        assert_eq!(ctx.search_keyword(), Some("phone"));
        ctx.item_name = Some("iphone".into());
        assert_eq!(ctx.search_keyword(), Some("iphone"));
    }

    #[test]
    fn test_camel_case_wire_format() {
        let mut ctx = SessionContext::default();
        ctx.begin_turn();
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(json.contains("conversationTurn"));
        assert!(json.contains("infoScore"));
    }
}

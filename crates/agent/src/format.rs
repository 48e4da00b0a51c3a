//! Rendering of ranked search results
//!
//! Builds the numbered investigation list shown to the user: type tag,
//! location, date, a bucketed confidence label and up to two match
//! reasons per item. At most five items are rendered; the remainder is
//! summarized in a "+N more" suffix.

use findit_config::ResponseTemplates;
use findit_core::{Language, ScoredItem};

/// Items rendered in the reply text (the full ranked list still travels
/// in the structured context)
const RENDER_LIMIT: usize = 5;
/// Match reasons shown per item
const REASON_LIMIT: usize = 2;

/// Confidence bucket label
fn confidence_label(confidence: u8) -> &'static str {
    if confidence >= 70 {
        "High"
    } else if confidence >= 40 {
        "Medium"
    } else {
        "Low"
    }
}

/// Format ranked results into the reply text. An empty slice renders the
/// localized no-results template.
pub fn format_results(
    items: &[ScoredItem],
    lang: Language,
    templates: &ResponseTemplates,
) -> String {
    if items.is_empty() {
        return templates.no_results.get(lang).to_string();
    }

    let mut response = String::from(templates.results_header.get(lang));
    response.push('\n');

    for (i, scored) in items.iter().take(RENDER_LIMIT).enumerate() {
        let confidence = scored.confidence();
        response.push_str(&format!(
            "\n{}. [{}] {}",
            i + 1,
            scored.item.item_type.tag(),
            scored.item.title
        ));
        response.push_str(&format!(
            "\n   📍 {}",
            if scored.item.location.is_empty() {
                "Location not specified"
            } else {
                &scored.item.location
            }
        ));
        response.push_str(&format!(
            "\n   📅 {}",
            scored.item.date_lost_found.as_deref().unwrap_or("Date not specified")
        ));
        response.push_str(&format!(
            "\n   🎯 Confidence: {} ({confidence}%)",
            confidence_label(confidence)
        ));
        if !scored.match_reasons.is_empty() {
            let reasons: Vec<&str> = scored
                .match_reasons
                .iter()
                .take(REASON_LIMIT)
                .map(|r| r.as_str())
                .collect();
            response.push_str(&format!("\n   📋 Why: {}", reasons.join(", ")));
        }
    }

    response.push_str("\n\n");
    response.push_str(templates.review_carefully.get(lang));

    if items.len() > RENDER_LIMIT {
        response.push_str(&templates.more_results(lang, items.len() - RENDER_LIMIT));
    }

    response.push_str("\n\n");
    response.push_str(templates.verify_footer.get(lang));

    response
}

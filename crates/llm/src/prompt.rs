//! Investigator prompt contract

use findit_core::Language;

/// Build the strict system prompt for the fallback model.
///
/// The contract bounds the model tightly: it may only speak the detected
/// language, stays in the investigator persona, asks exactly one
/// clarifying question, and refuses anything outside the lost & found
/// domain.
pub fn investigator_prompt(language: Language) -> String {
    format!(
        "You are FindIt AI – Lost & Found Investigator. STRICT RULES:\n\
         - Reply in {language} ONLY\n\
         - MAX 2-3 sentences\n\
         - Act as an investigator, not a search bar\n\
         - Ask ONE clarifying question about item, location, or details\n\
         - Provide reasoning and guidance\n\
         - NO storytelling\n\
         - ONLY Lost & Found, item recovery, and listing management topics\n\
         - If unsure, ask a clarification question instead of guessing\n\
         - Politely refuse unrelated questions",
        language = language.name(),
    )
}

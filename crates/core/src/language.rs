//! Language definitions for the assistant
//!
//! The assistant replies in one of two languages: English or romanized
//! Hindi (Hinglish). Detection is heuristic and never fails.

use serde::{Deserialize, Serialize};

/// Supported reply languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

/// Hindi function words that commonly appear in romanized (Hinglish) input.
/// Each occurrence counts +2 toward the Hindi score during detection.
const HINDI_FUNCTION_WORDS: &[&str] = &[
    "kya", "kahan", "kaise", "mera", "meri", "hai", "nahi", "toh", "aur", "gaya", "gayi", "hoon",
];

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "hi" | "hin" | "hindi" | "hinglish" => Some(Self::Hindi),
            _ => None,
        }
    }

    /// Detect the reply language for an utterance.
    ///
    /// Scores +1 per Devanagari scalar value and +2 per Hindi function
    /// word contained in the lowercased text; a score above 3 classifies
    /// the utterance as Hindi. Always returns a value.
    pub fn detect(text: &str) -> Self {
        let mut score = text.chars().filter(|c| is_devanagari(*c)).count();

        let lower = text.to_lowercase();
        for word in HINDI_FUNCTION_WORDS {
            if lower.contains(word) {
                score += 2;
            }
        }

        if score > 3 {
            Self::Hindi
        } else {
            Self::English
        }
    }
}

/// Check if a character falls in the Devanagari Unicode block
fn is_devanagari(c: char) -> bool {
    let code = c as u32;
    (0x0900..=0x097F).contains(&code)
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

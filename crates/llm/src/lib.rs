//! Fallback text generation
//!
//! A bounded call to an external model, used only when no rule matches an
//! utterance. The prompt contract is strict: reply language, investigator
//! persona, 2-3 sentences, exactly one clarifying question, refusal of
//! non-domain topics.

pub mod generator;
pub mod prompt;

pub use generator::OllamaGenerator;
pub use prompt::investigator_prompt;

use thiserror::Error;

/// Generator errors
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Network(err.to_string())
    }
}

impl From<LlmError> for findit_core::CoreError {
    fn from(err: LlmError) -> Self {
        findit_core::CoreError::Generator(err.to_string())
    }
}

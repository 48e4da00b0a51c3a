//! Core error types

use thiserror::Error;

/// Errors shared across the assistant crates
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Generator error: {0}")]
    Generator(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;

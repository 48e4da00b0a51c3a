//! Configuration management for the FindIt assistant
//!
//! Supports loading configuration from:
//! - TOML files (`findit.toml`)
//! - Environment variables (`FINDIT_` prefix, `__` separator)
//!
//! Also carries the domain data that drives the rule engine:
//! - `Lexicon` — the keyword tables for extraction and intent scoring
//! - `ResponseTemplates` — localized canned replies

pub mod lexicon;
pub mod responses;
pub mod settings;

pub use lexicon::{CategoryEntry, Lexicon};
pub use responses::{Localized, ResponseTemplates};
pub use settings::{
    load_settings, GeneratorConfig, ServerConfig, Settings, StoreBackend, StoreConfig,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

//! Runtime settings
//!
//! Layered loading: an optional `findit.toml` in the working directory,
//! then `FINDIT_`-prefixed environment variables (`__` path separator,
//! e.g. `FINDIT_SERVER__PORT=8080`).

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Top-level settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub generator: GeneratorConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_enabled: bool,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Which item store backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// In-memory store, for tests and demos
    #[default]
    Memory,
    /// PostgREST-style row endpoint
    Rest,
}

/// Item store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Base URL of the REST row endpoint, e.g. `https://x.example.co/rest/v1`
    pub rest_url: Option<String>,
    /// Service key sent as `apikey` + bearer token
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            rest_url: None,
            api_key: None,
            timeout_secs: 10,
        }
    }
}

/// Fallback text generator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    /// Output length bound passed to the model
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "http://localhost:11434".to_string(),
            model: "phi3:mini".to_string(),
            temperature: 0.3,
            max_tokens: 120,
            timeout_secs: 30,
        }
    }
}

/// Load settings from `findit.toml` (optional) and the environment
pub fn load_settings() -> Result<Settings, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("findit").required(false))
        .add_source(config::Environment::with_prefix("FINDIT").separator("__"))
        .build()?
        .try_deserialize()?;
    Ok(settings)
}

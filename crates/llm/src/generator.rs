//! Ollama-backed fallback generator
//!
//! Single non-streaming call against `/api/generate`. Failures propagate
//! as errors without retrying; the conversation driver owns the
//! user-visible unavailability message and any retry policy belongs to
//! the caller above it.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use findit_config::GeneratorConfig;
use findit_core::{CoreError, TextGenerator};

use crate::LlmError;

/// Text generator speaking the Ollama generate API
pub struct OllamaGenerator {
    client: Client,
    config: GeneratorConfig,
}

impl OllamaGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Configuration(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.config.endpoint.trim_end_matches('/'), path)
    }

    async fn execute(&self, request: &GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let response = self
            .client
            .post(self.api_url("/generate"))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api(format!("{status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, CoreError> {
        let request = GenerateRequest {
            model: self.config.model.clone(),
            prompt: format!("{system_prompt}\n\nUser: {user_message}\n\nAssistant:"),
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
                num_predict: self.config.max_tokens as i32,
            },
        };

        let start = std::time::Instant::now();
        let result = self.execute(&request).await?;
        tracing::debug!(
            model = %self.config.model,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fallback generation complete"
        );

        let text = result.response.trim().to_string();
        if text.is_empty() {
            return Err(LlmError::InvalidResponse("empty completion".to_string()).into());
        }
        Ok(text)
    }

    async fn is_available(&self) -> bool {
        self.client
            .get(format!("{}/api/tags", self.config.endpoint.trim_end_matches('/')))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

// Ollama API types
#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: i32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let generator = OllamaGenerator::new(GeneratorConfig {
            endpoint: "http://localhost:11434/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(generator.api_url("/generate"), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_model_name() {
        let generator = OllamaGenerator::new(GeneratorConfig::default()).unwrap();
        assert_eq!(generator.model_name(), "phi3:mini");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_errors_without_retry() {
        let generator = OllamaGenerator::new(GeneratorConfig {
            endpoint: "http://192.0.2.1:1".to_string(),
            timeout_secs: 1,
            ..Default::default()
        })
        .unwrap();

        let start = std::time::Instant::now();
        let result = generator.generate("system", "hello").await;
        assert!(result.is_err());
        // A single bounded attempt, no backoff loop
        assert!(start.elapsed() < std::time::Duration::from_secs(5));
    }
}

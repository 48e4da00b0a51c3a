//! REST item store
//!
//! Talks to a PostgREST-style row endpoint (`GET {base}/items?...`) with
//! `eq.`/`order`/`limit` query operators. Network and decode failures map
//! to `StoreError` so the engine can tell an outage apart from an empty
//! table.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use findit_core::{ItemRecord, ItemStatus, ItemStore, ItemType, StoreError};

/// REST store configuration
#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    /// Base URL, e.g. `https://db.example.com/rest/v1`
    pub base_url: String,
    /// Service key sent as `apikey` header and bearer token
    pub api_key: Option<String>,
    pub timeout: Duration,
}

/// Item store backed by a REST row endpoint
pub struct RestItemStore {
    client: Client,
    config: RestStoreConfig,
}

impl RestItemStore {
    pub fn new(config: RestStoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Unavailable(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.config.base_url.trim_end_matches('/'))
    }

    async fn fetch(&self, query: &[(&str, String)]) -> Result<Vec<ItemRecord>, StoreError> {
        let mut request = self.client.get(self.items_url()).query(query);

        if let Some(key) = &self.config.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Query(format!("{status}: {body}")));
        }

        response
            .json::<Vec<ItemRecord>>()
            .await
            .map_err(|e| StoreError::InvalidRecord(e.to_string()))
    }
}

#[async_trait]
impl ItemStore for RestItemStore {
    async fn fetch_recent(
        &self,
        status: ItemStatus,
        limit: usize,
    ) -> Result<Vec<ItemRecord>, StoreError> {
        self.fetch(&[
            ("status", format!("eq.{}", status.as_str())),
            ("order", "created_at.desc".to_string()),
            ("limit", limit.to_string()),
        ])
        .await
    }

    async fn fetch_by_type(
        &self,
        status: ItemStatus,
        item_type: ItemType,
        limit: usize,
    ) -> Result<Vec<ItemRecord>, StoreError> {
        self.fetch(&[
            ("status", format!("eq.{}", status.as_str())),
            ("item_type", format!("eq.{}", item_type.as_str())),
            ("order", "created_at.desc".to_string()),
            ("limit", limit.to_string()),
        ])
        .await
    }

    fn name(&self) -> &str {
        "rest"
    }
}

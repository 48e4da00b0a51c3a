//! Shared application state

use std::sync::Arc;

use findit_agent::Assistant;
use findit_config::Settings;
use findit_search::SearchEngine;

/// State shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
    pub engine: Arc<SearchEngine>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(assistant: Arc<Assistant>, engine: Arc<SearchEngine>, settings: Settings) -> Self {
        Self {
            assistant,
            engine,
            settings: Arc::new(settings),
        }
    }
}

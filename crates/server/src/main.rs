//! FindIt server binary

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use findit_agent::Assistant;
use findit_config::{load_settings, Lexicon, ResponseTemplates, StoreBackend};
use findit_core::{ItemStore, TextGenerator};
use findit_llm::OllamaGenerator;
use findit_search::{MemoryItemStore, RestItemStore, SearchEngine};
use findit_server::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings().context("failed to load settings")?;

    let lexicon = Arc::new(Lexicon::default());
    let templates = Arc::new(ResponseTemplates::default());

    let store: Arc<dyn ItemStore> = match settings.store.backend {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory item store; listings will not persist");
            Arc::new(MemoryItemStore::new())
        }
        StoreBackend::Rest => {
            let base_url = settings
                .store
                .rest_url
                .clone()
                .context("store.backend = \"rest\" requires store.rest_url")?;
            Arc::new(RestItemStore::new(findit_search::RestStoreConfig {
                base_url,
                api_key: settings.store.api_key.clone(),
                timeout: std::time::Duration::from_secs(settings.store.timeout_secs),
            })?)
        }
    };
    tracing::info!(store = store.name(), "item store ready");

    let engine = Arc::new(SearchEngine::new(store, lexicon.clone()));

    let mut assistant = Assistant::new(engine.clone(), lexicon, templates);
    if settings.generator.enabled {
        let generator = OllamaGenerator::new(settings.generator.clone())?;
        if !generator.is_available().await {
            tracing::warn!(
                model = generator.model_name(),
                "fallback model not reachable at startup; unclassified turns will get the unavailability reply"
            );
        }
        assistant = assistant.with_generator(Arc::new(generator));
    } else {
        tracing::info!("generative fallback disabled by configuration");
    }

    let bind_addr = settings.server.bind_addr();
    let state = AppState::new(Arc::new(assistant), engine, settings);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "findit server listening");

    axum::serve(listener, router).await.context("server error")?;

    Ok(())
}

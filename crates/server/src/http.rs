//! HTTP endpoints
//!
//! REST API for the assistant.

use axum::{
    extract::{Query, State},
    http::{HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use findit_agent::{ChatRequest, ChatTurn};
use findit_core::{ItemRecord, ItemStatus};
use findit_search::{pair_score, PairScore, SearchParams};

use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(
        &state.settings.server.cors_origins,
        state.settings.server.cors_enabled,
    );

    Router::new()
        // Chat turn (stateless; session context round-trips in the body)
        .route("/api/assistant/chat", post(chat))
        // Direct search over the item store
        .route("/api/items/search", get(search_items))
        // Lost/found cross-listing score
        .route("/api/items/pair-score", post(pair_score_handler))
        // Health checks
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns a permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000 for safety
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    if origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return localhost_cors();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::error!("All configured CORS origins are invalid, falling back to localhost");
        return localhost_cors();
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

fn localhost_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Chat endpoint: one conversational turn
async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatTurn>, ServerError> {
    if request.message.trim().is_empty() {
        return Err(ServerError::InvalidRequest("message is empty".to_string()));
    }

    let turn = state.assistant.process(&request).await;
    Ok(Json(turn))
}

/// Search query parameters
#[derive(Debug, Deserialize)]
struct SearchQuery {
    keyword: Option<String>,
    location: Option<String>,
}

/// Direct search over the item store
async fn search_items(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<serde_json::Value>, ServerError> {
    let params = SearchParams {
        keyword: query.keyword,
        location: query.location,
        status: ItemStatus::Active,
    };

    match state.engine.search(&params).await {
        Ok(items) => {
            let count = items.len();
            Ok(Json(serde_json::json!({
                "items": items,
                "count": count,
            })))
        }
        Err(e) => {
            tracing::error!("Search error: {}", e);
            Err(ServerError::Upstream(e.to_string()))
        }
    }
}

/// Pair-score request: one lost and one found listing
#[derive(Debug, Deserialize)]
struct PairScoreRequest {
    lost: ItemRecord,
    found: ItemRecord,
}

/// Score a lost listing against a found listing
async fn pair_score_handler(
    Json(request): Json<PairScoreRequest>,
) -> Json<PairScore> {
    Json(pair_score(&request.lost, &request.found))
}

/// Health check
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness check: verifies the item store answers
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let store_ok = state
        .engine
        .store()
        .fetch_recent(ItemStatus::Active, 1)
        .await
        .is_ok();

    let status = if store_ok { "ready" } else { "degraded" };
    Json(serde_json::json!({
        "status": status,
        "store": state.engine.store().name(),
    }))
}

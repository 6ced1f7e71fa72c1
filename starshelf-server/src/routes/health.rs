//! Liveness and health check routes

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::Extension, Json};
use serde_json::json;
use tokio::sync::RwLock;

use crate::models::HealthResponse;
use crate::store::Store;

/// Server start time for uptime calculation
pub struct ServerState {
    pub store: Store,
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }
}

/// Shared state wrapper
pub type SharedState = Arc<RwLock<ServerState>>;

/// GET / - Liveness message
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "starshelf repository organizer API",
        "status": "running"
    }))
}

/// GET /health - Health check endpoint
pub async fn health_check(Extension(state): Extension<SharedState>) -> Json<HealthResponse> {
    let state = state.read().await;
    let uptime = state.start_time.elapsed();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime.as_secs(),
        total_repos: state.store.len(),
    })
}

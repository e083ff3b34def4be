use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::app::AppState;

/// GET /health — liveness probe, returns server metadata.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    let uptime_secs = (chrono::Utc::now() - state.started_at).num_seconds();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "active_clients": state.registry.len(),
        "states": state.config.states.len(),
        "started_at": state.started_at.to_rfc3339(),
        "uptime_secs": uptime_secs,
    }))
}

use axum::{routing::get, Router};
use chrono::{DateTime, Utc};
use moodcast_core::config::MoodcastConfig;
use std::sync::Arc;

use crate::ws::registry::ClientRegistry;

/// Central shared state — passed as Arc<AppState> to all Axum handlers.
pub struct AppState {
    pub config: MoodcastConfig,
    /// Active WS connections, shared with the publisher and the simulator.
    pub registry: Arc<ClientRegistry>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: MoodcastConfig, registry: Arc<ClientRegistry>) -> Self {
        Self {
            config,
            registry,
            started_at: Utc::now(),
        }
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::http::health::health_handler))
        .route("/ws", get(crate::ws::connection::ws_handler))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

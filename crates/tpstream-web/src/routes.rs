//! Web routes.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Json},
    routing::get,
};
use serde_json::json;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tracing::debug;

use crate::sse::create_reading_stream;

/// Shared state for the web server.
pub struct AppState {
    pub readings_tx: broadcast::Sender<f64>,
}

/// Create the web router.
///
/// Every value sent on `readings_tx` is fanned out to all connected
/// `/events` subscribers. Static assets are served from `static_dir` at the
/// root path.
pub fn create_router(readings_tx: broadcast::Sender<f64>, static_dir: &str) -> Router {
    let state = Arc::new(AppState { readings_tx });

    Router::new()
        .route("/health", get(health))
        .route("/events", get(readings_sse))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "subscribers": state.readings_tx.receiver_count(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn readings_sse(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    debug!("sse subscriber connected");
    create_reading_stream(state.readings_tx.subscribe())
}

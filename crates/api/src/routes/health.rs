//! Health check endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let queue = &state.queue;
    let status = if queue.is_closed() { "degraded" } else { "ok" };

    Json(json!({
        "status": status,
        "service": "relay-api",
        "version": env!("CARGO_PKG_VERSION"),
        "queue": {
            "capacity": queue.capacity(),
            "available": queue.available(),
            "delivery_timeout_secs": state.config.webhook_delivery_timeout_secs,
        }
    }))
}

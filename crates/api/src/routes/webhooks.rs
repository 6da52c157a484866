//! Webhook enqueue route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use relay_common::error::AppError;
use relay_common::types::WebhookRequest;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/webhooks", post(enqueue_webhook))
}

/// POST /api/webhooks — Queue a webhook for delivery.
///
/// Responds as soon as the request is buffered. Delivery failures are only
/// visible in the worker's log.
async fn enqueue_webhook(
    State(state): State<AppState>,
    Json(webhook): Json<WebhookRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    if webhook.url.trim().is_empty() {
        return Err(AppError::Validation("url is required".to_string()));
    }
    if state.queue.is_closed() {
        return Err(AppError::Unavailable(
            "webhook delivery worker is not running".to_string(),
        ));
    }

    tracing::debug!(url = %webhook.url, "Queueing webhook");
    state.queue.enqueue(webhook).await;

    Ok((StatusCode::ACCEPTED, Json(json!({ "status": "queued" }))))
}

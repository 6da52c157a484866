//! Shared application state for the Axum API server.

use relay_common::config::AppConfig;
use relay_notifier::WebhookQueue;

/// Application state shared across all route handlers via Axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub queue: WebhookQueue,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(queue: WebhookQueue, config: AppConfig) -> Self {
        Self { queue, config }
    }
}

//! Webhook relay API server binary entrypoint.

use tower_http::trace::TraceLayer;

use relay_common::config::AppConfig;
use relay_common::telemetry::init_tracing;
use relay_notifier::{WebhookQueue, WebhookSender};

use relay_api::routes::create_router;
use relay_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize tracing
    init_tracing(
        config.log_format,
        "relay_api=info,relay_notifier=info,tower_http=info",
    );

    tracing::info!("Starting webhook relay API server...");

    // Start the delivery queue and its single worker
    let sender = WebhookSender::new()?;
    let (queue, worker) = WebhookQueue::channel(sender, config.webhook_queue_capacity);
    let worker = worker
        .with_delivery_timeout(config.webhook_delivery_timeout())
        .spawn();

    // Build application state
    let addr = config.api_bind_addr;
    let state = AppState::new(queue, config);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Received shutdown signal, stopping gracefully...");
        })
        .await?;

    // Buffered webhooks are not persisted across restarts.
    worker.abort();

    tracing::info!("Webhook relay API stopped.");
    Ok(())
}

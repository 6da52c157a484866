//! Bounded FIFO queue feeding the delivery worker.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use relay_common::types::WebhookRequest;

use crate::sender::WebhookSender;
use crate::worker::DeliveryWorker;

/// Handle used by callers to enqueue webhooks.
///
/// Clones share the same queue and worker. The worker keeps running for as
/// long as at least one handle is alive.
#[derive(Debug, Clone)]
pub struct WebhookQueue {
    tx: mpsc::Sender<WebhookRequest>,
}

impl WebhookQueue {
    /// Creates the queue and its worker without starting the worker.
    ///
    /// A `capacity` of zero is treated as one.
    pub fn channel(sender: WebhookSender, capacity: usize) -> (Self, DeliveryWorker) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, DeliveryWorker::new(rx, sender))
    }

    /// Creates the queue and spawns its worker on the current runtime.
    pub fn start(sender: WebhookSender, capacity: usize) -> (Self, JoinHandle<()>) {
        let (queue, worker) = Self::channel(sender, capacity);
        (queue, worker.spawn())
    }

    /// Hands `webhook` to the worker.
    ///
    /// Waits only while the buffer is full. Delivery outcome is never reported
    /// back; failures show up in the worker's log.
    pub async fn enqueue(&self, webhook: WebhookRequest) {
        if let Err(mpsc::error::SendError(webhook)) = self.tx.send(webhook).await {
            tracing::error!(url = %webhook.url, "Webhook worker is not running, dropping webhook");
        }
    }

    /// Maximum number of buffered webhooks.
    pub fn capacity(&self) -> usize {
        self.tx.max_capacity()
    }

    /// Free buffer slots right now.
    pub fn available(&self) -> usize {
        self.tx.capacity()
    }

    /// Whether the worker has gone away.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

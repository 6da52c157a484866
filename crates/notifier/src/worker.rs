//! Background task that drains the webhook queue.
//!
//! Deliveries are strictly sequential: the worker does not dequeue the next
//! request until the current HTTP call has finished. A failed delivery is
//! logged and dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use relay_common::types::WebhookRequest;

use crate::error::DeliveryError;
use crate::sender::WebhookSender;

/// Single consumer of a [`WebhookQueue`](crate::WebhookQueue).
pub struct DeliveryWorker {
    rx: mpsc::Receiver<WebhookRequest>,
    sender: WebhookSender,
    delivery_timeout: Option<Duration>,
}

impl DeliveryWorker {
    pub(crate) fn new(rx: mpsc::Receiver<WebhookRequest>, sender: WebhookSender) -> Self {
        Self {
            rx,
            sender,
            delivery_timeout: None,
        }
    }

    /// Cancel each delivery that has not completed within `timeout`.
    pub fn with_delivery_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.delivery_timeout = timeout;
        self
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Run until every queue handle has been dropped and the buffer is empty.
    pub async fn run(mut self) {
        tracing::info!(
            capacity = self.rx.max_capacity(),
            delivery_timeout_secs = self.delivery_timeout.map(|t| t.as_secs()),
            "Webhook delivery worker started"
        );

        while let Some(webhook) = self.rx.recv().await {
            if let Err(e) = self.deliver(&webhook).await {
                tracing::error!(error = %e, url = %webhook.url, "Failed to send webhook");
            }
        }

        tracing::info!("Webhook queue closed, delivery worker stopped");
    }

    async fn deliver(&self, webhook: &WebhookRequest) -> Result<(), DeliveryError> {
        let cancel = CancellationToken::new();

        let Some(timeout) = self.delivery_timeout else {
            return self.sender.send(&cancel, webhook).await;
        };

        let send = self.sender.send(&cancel, webhook);
        tokio::pin!(send);

        tokio::select! {
            result = &mut send => result,
            _ = tokio::time::sleep(timeout) => {
                cancel.cancel();
                send.await
            }
        }
    }
}

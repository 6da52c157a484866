//! Single-attempt HTTP delivery of a webhook request.

use reqwest::header::{CONTENT_TYPE, USER_AGENT as USER_AGENT_HEADER};
use reqwest::{Client, Method};
use tokio_util::sync::CancellationToken;

use relay_common::types::WebhookRequest;

use crate::error::DeliveryError;

/// Product identifier sent as `User-Agent` on every webhook.
pub const USER_AGENT: &str = "Grafana";

/// Performs webhook HTTP calls over a shared, pooled client.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WebhookSender {
    client: Client,
}

impl WebhookSender {
    /// Creates a sender with a default client. No request timeout is set;
    /// deliveries are bounded only by the cancellation token passed to
    /// [`WebhookSender::send`].
    pub fn new() -> Result<Self, DeliveryError> {
        let client = Client::builder().build().map_err(DeliveryError::Build)?;
        Ok(Self::with_client(client))
    }

    /// Wraps an existing client so webhook delivery shares its connection
    /// pool and settings with other outbound traffic.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Performs exactly one HTTP round trip for `webhook`.
    ///
    /// Returns `Ok(())` for any 2xx response. Transport failures are returned
    /// as-is; non-2xx responses yield [`DeliveryError::Status`] after the
    /// response body has been logged at debug level.
    pub async fn send(
        &self,
        cancel: &CancellationToken,
        webhook: &WebhookRequest,
    ) -> Result<(), DeliveryError> {
        tracing::debug!(
            url = %webhook.url,
            http_method = %webhook.http_method,
            "Sending webhook"
        );

        let method_name = webhook.effective_method();
        let method = Method::from_bytes(method_name.as_bytes())
            .map_err(|_| DeliveryError::InvalidMethod(method_name.to_string()))?;

        let mut builder = self
            .client
            .request(method, webhook.url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT_HEADER, USER_AGENT)
            .body(webhook.body.clone());

        if let Some((user, password)) = webhook.credentials() {
            builder = builder.basic_auth(user, Some(password));
        }

        let request = builder.build().map_err(DeliveryError::Build)?;

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(DeliveryError::Cancelled),
            result = self.client.execute(request) => result.map_err(DeliveryError::Transport)?,
        };

        let status = response.status();
        if status.is_success() {
            // Dropping the response here releases the connection.
            return Ok(());
        }

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(DeliveryError::Cancelled),
            body = response.text() => body.map_err(DeliveryError::Transport)?,
        };

        tracing::debug!(statuscode = %status, body = %body, "Webhook failed");
        Err(DeliveryError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_method_is_construction_error() {
        let sender = WebhookSender::new().unwrap();
        let webhook = WebhookRequest::new("http://localhost/hook", "{}").with_method("NOT A METHOD");

        let err = sender
            .send(&CancellationToken::new(), &webhook)
            .await
            .unwrap_err();
        assert!(matches!(err, DeliveryError::InvalidMethod(ref m) if m == "NOT A METHOD"));
    }

    #[tokio::test]
    async fn test_invalid_url_is_construction_error() {
        let sender = WebhookSender::new().unwrap();
        let webhook = WebhookRequest::new("not a url", "{}");

        let err = sender
            .send(&CancellationToken::new(), &webhook)
            .await
            .unwrap_err();
        match err {
            DeliveryError::Build(e) => assert!(e.is_builder()),
            other => panic!("expected build error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancelled_context_skips_round_trip() {
        let sender = WebhookSender::new().unwrap();
        let webhook = WebhookRequest::new("http://127.0.0.1:1/hook", "{}");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = sender.send(&cancel, &webhook).await.unwrap_err();
        assert!(matches!(err, DeliveryError::Cancelled));
    }
}

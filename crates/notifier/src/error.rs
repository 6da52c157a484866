use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single webhook delivery attempt.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The request could not be turned into an HTTP request.
    #[error("invalid http method: {0:?}")]
    InvalidMethod(String),

    /// Building the outbound request failed (e.g. malformed URL).
    #[error(transparent)]
    Build(reqwest::Error),

    /// The round trip failed below HTTP: DNS, connect, I/O, TLS.
    #[error(transparent)]
    Transport(reqwest::Error),

    /// The delivery context was cancelled before a response arrived.
    #[error("webhook delivery cancelled")]
    Cancelled,

    /// The endpoint answered with a non-2xx status.
    #[error("Webhook response status {0}")]
    Status(StatusCode),
}

impl DeliveryError {
    /// Status code of an application-level failure, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DeliveryError::Status(status) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_embeds_status_text() {
        let err = DeliveryError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Webhook response status 500 Internal Server Error"
        );
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_non_status_errors_have_no_status() {
        assert_eq!(DeliveryError::Cancelled.status(), None);
        assert_eq!(DeliveryError::InvalidMethod("BAD METHOD".into()).status(), None);
    }
}

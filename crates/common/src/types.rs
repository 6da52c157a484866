use serde::{Deserialize, Serialize};

/// HTTP method used when a request leaves `http_method` empty.
pub const DEFAULT_HTTP_METHOD: &str = "POST";

/// An outbound webhook call, fully formed by the caller.
///
/// The value is moved into the delivery queue on enqueue and only read by the
/// worker afterwards. Defaults (such as the HTTP method) are resolved at
/// delivery time, so a queued request may still carry an empty method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRequest {
    /// Target URL of the receiving endpoint.
    pub url: String,

    /// HTTP method; empty means POST.
    #[serde(default)]
    pub http_method: String,

    /// Raw payload, usually pre-serialized JSON.
    #[serde(default)]
    pub body: String,

    /// Basic auth username.
    #[serde(default)]
    pub user: Option<String>,

    /// Basic auth password.
    #[serde(default)]
    pub password: Option<String>,
}

impl WebhookRequest {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.http_method = method.into();
        self
    }

    pub fn with_basic_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    /// The method the request will be sent with.
    pub fn effective_method(&self) -> &str {
        if self.http_method.is_empty() {
            DEFAULT_HTTP_METHOD
        } else {
            &self.http_method
        }
    }

    /// Basic auth credentials, only when both parts are present and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let user = self.user.as_deref().filter(|u| !u.is_empty())?;
        let password = self.password.as_deref().filter(|p| !p.is_empty())?;
        Some((user, password))
    }
}

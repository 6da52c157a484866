use std::net::SocketAddr;
use std::time::Duration;

/// Default number of requests the delivery queue buffers before enqueue
/// starts applying backpressure to callers.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address of the API server (default: 0.0.0.0:3000)
    pub api_bind_addr: SocketAddr,

    /// Capacity of the webhook delivery queue (default: 10)
    pub webhook_queue_capacity: usize,

    /// Optional deadline for a single webhook delivery, in seconds.
    /// Unset means a delivery is only bounded by the transport itself.
    pub webhook_delivery_timeout_secs: Option<u64>,

    /// Log output format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_queue_capacity: usize = lookup("WEBHOOK_QUEUE_CAPACITY")
            .unwrap_or_else(|| DEFAULT_QUEUE_CAPACITY.to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("WEBHOOK_QUEUE_CAPACITY must be a valid usize"))?;
        if webhook_queue_capacity == 0 {
            anyhow::bail!("WEBHOOK_QUEUE_CAPACITY must be at least 1");
        }

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("LOG_FORMAT must be `pretty` or `json`, got `{other}`"),
        };

        Ok(Self {
            api_bind_addr: lookup("API_BIND_ADDR")
                .unwrap_or_else(|| "0.0.0.0:3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("API_BIND_ADDR must be a valid socket address"))?,
            webhook_queue_capacity,
            webhook_delivery_timeout_secs: lookup("WEBHOOK_DELIVERY_TIMEOUT_SECS")
                .map(|v| v.parse())
                .transpose()
                .map_err(|_| {
                    anyhow::anyhow!("WEBHOOK_DELIVERY_TIMEOUT_SECS must be a valid u64")
                })?,
            log_format,
        })
    }

    pub fn webhook_delivery_timeout(&self) -> Option<Duration> {
        self.webhook_delivery_timeout_secs.map(Duration::from_secs)
    }
}

//! Asynchronous webhook delivery.
//!
//! Callers hand a [`WebhookRequest`] to a [`WebhookQueue`]; a single
//! [`DeliveryWorker`] drains the queue in arrival order and performs each
//! HTTP call through [`WebhookSender`]. Failures are logged and the request
//! is dropped; nothing is reported back to the caller and nothing is retried.
//!
//! [`WebhookRequest`]: relay_common::types::WebhookRequest

pub mod error;
pub mod queue;
pub mod sender;
pub mod worker;

pub use error::DeliveryError;
pub use queue::WebhookQueue;
pub use sender::WebhookSender;
pub use worker::DeliveryWorker;

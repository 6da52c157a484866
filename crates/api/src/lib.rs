//! HTTP front end for the webhook delivery queue.
//!
//! Endpoints:
//! - GET  /health — liveness plus queue headroom
//! - POST /api/webhooks — enqueue a webhook for background delivery

pub mod routes;
pub mod state;

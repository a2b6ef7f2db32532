//! procmetrics HTTP adapter.
//!
//! Mounts the request instrumentation on axum routers and provides a small
//! composition root (config, state, router) used by the binary (`main.rs`)
//! and by integration tests.

pub mod app_state;
pub mod config;
pub mod middleware;
pub mod ops;
pub mod router;

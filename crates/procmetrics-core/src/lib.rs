//! procmetrics core: the process-wide counter/timer registry and the
//! framework-agnostic request instrumentation wrapper.
//!
//! This crate carries no runtime or HTTP dependencies so it can be embedded in
//! any server, worker, or test harness.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Registry operations cannot fail; the only errors surfaced by this crate
//! belong to the composition root (config, I/O) and live in [`MetricsError`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod instrument;
pub mod registry;

/// Shared result type.
pub use error::{Result, MetricsError};
pub use instrument::{instrument, Handler, Instrumented, HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION};
pub use registry::MetricsRegistry;

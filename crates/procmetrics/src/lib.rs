//! Top-level facade crate for procmetrics.
//!
//! Re-exports the registry core and the HTTP adapter so users can depend on a single crate.

pub mod core {
    pub use procmetrics_core::*;
}

pub mod http {
    pub use procmetrics_http::*;
}

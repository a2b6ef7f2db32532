//! Axum router wiring.
//!
//! `/` and `/healthz`, wrapped with request instrumentation unless
//! `metrics.instrument_http` is off.

use axum::{routing::get, Router};

use crate::{app_state::AppState, middleware, ops};

pub fn build_router(state: AppState) -> Router {
    let registry = state.registry();
    let instrument_http = state.cfg().metrics.instrument_http;

    let router = Router::new()
        .route("/", get(ops::index))
        .route("/healthz", get(ops::healthz))
        .with_state(state);

    if instrument_http {
        middleware::instrument_router(router, registry)
    } else {
        router
    }
}

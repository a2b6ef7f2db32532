//! axum middleware: count and time every request.
//!
//! Same contract as [`procmetrics_core::instrument`]: the counter moves before
//! the downstream handler runs, the duration is stored after it returns. A
//! panic in the downstream handler unwinds out of this future before the
//! duration is recorded.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::{from_fn_with_state, Next},
    response::Response,
    Router,
};

use procmetrics_core::{MetricsRegistry, HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION};

pub async fn track_http(
    State(registry): State<Arc<MetricsRegistry>>,
    req: Request,
    next: Next,
) -> Response {
    registry.increment_counter(HTTP_REQUESTS_TOTAL);
    let start = Instant::now();

    let res = next.run(req).await;

    registry.record_time(HTTP_REQUEST_DURATION, start.elapsed());
    res
}

/// Wrap every route currently on `router` with [`track_http`].
pub fn instrument_router<S>(router: Router<S>, registry: Arc<MetricsRegistry>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(from_fn_with_state(registry, track_http))
}

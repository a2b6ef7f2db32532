#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use tower::ServiceExt;

use procmetrics_core::{MetricsRegistry, HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION};
use procmetrics_http::{app_state::AppState, config, middleware, router};

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn ok_handler_is_counted_and_timed() {
    let registry = Arc::new(MetricsRegistry::new());
    let called = Arc::new(AtomicBool::new(false));

    let flag = Arc::clone(&called);
    let app = Router::new().route(
        "/",
        get(move || async move {
            flag.store(true, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(2)).await;
            StatusCode::OK
        }),
    );
    let app = middleware::instrument_router(app, Arc::clone(&registry));

    let res = app.oneshot(get_req("/")).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert!(called.load(Ordering::SeqCst));
    assert_eq!(registry.counter(HTTP_REQUESTS_TOTAL), 1);
    assert!(registry.timer(HTTP_REQUEST_DURATION) >= Duration::from_millis(2));
}

#[tokio::test]
async fn panicking_handler_skips_timer() {
    let registry = Arc::new(MetricsRegistry::new());

    async fn boom() -> StatusCode {
        panic!("handler failed")
    }
    let app = middleware::instrument_router(Router::new().route("/", get(boom)), Arc::clone(&registry));

    let joined = tokio::spawn(app.oneshot(get_req("/"))).await;
    assert!(joined.expect_err("handler panic must propagate").is_panic());

    assert_eq!(registry.counter(HTTP_REQUESTS_TOTAL), 1);
    assert_eq!(registry.timer(HTTP_REQUEST_DURATION), Duration::ZERO);
}

#[tokio::test]
async fn unmatched_routes_are_counted_too() {
    let registry = Arc::new(MetricsRegistry::new());
    let app = middleware::instrument_router(
        Router::new().route("/", get(|| async { "hi" })),
        Arc::clone(&registry),
    );

    let res = app.clone().oneshot(get_req("/missing")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = app.oneshot(get_req("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(registry.counter(HTTP_REQUESTS_TOTAL), 2);
}

#[tokio::test]
async fn demo_router_instruments_healthz() {
    let registry = Arc::new(MetricsRegistry::new());
    let cfg = config::load_from_str("version: 1\n").unwrap();
    let app = router::build_router(AppState::with_registry(cfg, Arc::clone(&registry)));

    for _ in 0..3 {
        let res = app.clone().oneshot(get_req("/healthz")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    assert_eq!(registry.counter(HTTP_REQUESTS_TOTAL), 3);
}

#[tokio::test]
async fn demo_router_without_instrumentation() {
    let registry = Arc::new(MetricsRegistry::new());
    let cfg = config::load_from_str("version: 1\nmetrics:\n  instrument_http: false\n").unwrap();
    let app = router::build_router(AppState::with_registry(cfg, Arc::clone(&registry)));

    let res = app.oneshot(get_req("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(registry.counter(HTTP_REQUESTS_TOTAL), 0);
    assert_eq!(registry.timer(HTTP_REQUEST_DURATION), Duration::ZERO);
}

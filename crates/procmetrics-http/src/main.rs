//! procmetrics demo server.
//!
//! Loads `procmetrics.yaml` (or `$PROCMETRICS_CONFIG`), mounts the request
//! instrumentation on the demo routes, and serves until Ctrl-C.

use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use procmetrics_core::error::{MetricsError, Result};
use procmetrics_http::{app_state::AppState, config, router};

const DEFAULT_CONFIG_PATH: &str = "procmetrics.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "procmetrics-http failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::var("PROCMETRICS_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.server.listen_addr()?;
    let instrument_http = cfg.metrics.instrument_http;

    let app = router::build_router(AppState::new(cfg));

    tracing::info!(%listen, instrument_http, config = %path, "procmetrics-http starting");
    let listener = TcpListener::bind(listen)
        .await
        .map_err(|e| MetricsError::Io(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MetricsError::Internal(format!("server failed: {e}")))?;

    tracing::info!("procmetrics-http stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
}

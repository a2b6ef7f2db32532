//! Shared application state for the demo server.

use std::sync::Arc;

use procmetrics_core::MetricsRegistry;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AppConfig,
    registry: Arc<MetricsRegistry>,
}

impl AppState {
    /// Bind the process-wide registry.
    pub fn new(cfg: AppConfig) -> Self {
        Self::with_registry(cfg, MetricsRegistry::global())
    }

    /// Inject a specific registry (tests, embedding in a larger app).
    pub fn with_registry(cfg: AppConfig, registry: Arc<MetricsRegistry>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, registry }),
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> Arc<MetricsRegistry> {
        Arc::clone(&self.inner.registry)
    }
}

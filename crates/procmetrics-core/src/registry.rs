//! Process-wide counter/timer registry.
//!
//! Two independent stores, each a `DashMap` (sharded reader/writer locks):
//! - counters: `name -> i64`, absent names read as 0
//! - timers:   `name -> Duration`, last write wins, absent names read as zero
//!
//! Reads take a shard read lock, writes take the shard write lock. Nothing here
//! performs I/O or holds a lock across calls.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use dashmap::DashMap;

static GLOBAL: OnceLock<Arc<MetricsRegistry>> = OnceLock::new();

#[derive(Debug, Default)]
pub struct MetricsRegistry {
    counters: DashMap<String, i64>,
    timers: DashMap<String, Duration>,
}

impl MetricsRegistry {
    /// Build an isolated registry. Prefer passing this around as
    /// `Arc<MetricsRegistry>` over reaching for [`MetricsRegistry::global`].
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
            timers: DashMap::new(),
        }
    }

    /// The process-wide instance, built exactly once on first call.
    pub fn global() -> Arc<MetricsRegistry> {
        Arc::clone(GLOBAL.get_or_init(|| {
            tracing::debug!("process-wide metrics registry initialized");
            Arc::new(MetricsRegistry::new())
        }))
    }

    /// Increment `name` by 1, creating it at 1 if absent.
    pub fn increment_counter(&self, name: &str) {
        // get_mut avoids allocating the key on the hot path
        if let Some(mut c) = self.counters.get_mut(name) {
            *c += 1;
            return;
        }
        *self.counters.entry(name.to_owned()).or_insert(0) += 1;
    }

    pub fn counter(&self, name: &str) -> i64 {
        self.counters.get(name).map(|c| *c).unwrap_or(0)
    }

    /// Overwrite the stored duration for `name`.
    pub fn record_time(&self, name: &str, duration: Duration) {
        if let Some(mut t) = self.timers.get_mut(name) {
            *t = duration;
            return;
        }
        self.timers.insert(name.to_owned(), duration);
    }

    pub fn timer(&self, name: &str) -> Duration {
        self.timers.get(name).map(|t| *t).unwrap_or(Duration::ZERO)
    }
}

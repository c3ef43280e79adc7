//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::metrics::ServiceMetrics;
use crate::store::TaskStore;

/// Shared application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Pending task pool.
    pub store: TaskStore,

    /// Metrics registry fed by the HTTP handlers.
    pub metrics: ServiceMetrics,

    /// Limit for one optimization pass, unbounded if `None`.
    pub search_timeout: Option<Duration>,
}

impl AppState {
    /// Create a new AppState wrapped in Arc.
    pub fn new(config: &Config) -> Arc<Self> {
        Arc::new(Self {
            store: TaskStore::new(),
            metrics: ServiceMetrics::new(),
            search_timeout: config.search_timeout(),
        })
    }
}

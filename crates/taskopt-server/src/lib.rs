//! taskopt Server Library
//!
//! This crate keeps the pending task pool and exposes the profit optimization
//! over HTTP, together with health and Prometheus metrics endpoints.

pub mod config;
pub mod http;
pub mod metrics;
pub mod state;
pub mod store;

pub use config::Config;
pub use metrics::ServiceMetrics;
pub use state::AppState;
pub use store::{Extraction, StoreError, TaskStore};

//! HTTP request and response types.
//!
//! Tasks travel as [`taskopt_core::Task`] directly:
//! `{"name": "...", "resources": ["..."], "profit": 1.5}`.

use serde::{Deserialize, Serialize};

/// Response body for a task submission.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppendResponse {
    /// Number of tasks accepted.
    pub added: usize,

    /// Pool size after the append.
    pub pool_size: usize,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check body.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,

    /// Tasks waiting in the pool.
    pub pending_tasks: usize,
}

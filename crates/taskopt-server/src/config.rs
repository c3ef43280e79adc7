//! Server configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// taskopt server configuration.
#[derive(Parser, Debug, Clone)]
#[command(name = "taskopt-server", about = "Selects the most profitable set of compatible tasks")]
pub struct Config {
    /// HTTP server bind address.
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub http_addr: String,

    /// Append logs to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Abort an optimization pass after this many seconds (unbounded if unset).
    #[arg(long)]
    pub search_timeout_secs: Option<u64>,
}

impl Config {
    /// Search timeout as a Duration.
    pub fn search_timeout(&self) -> Option<Duration> {
        self.search_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_addr: "0.0.0.0:8080".to_string(),
            log_file: None,
            search_timeout_secs: None,
        }
    }
}

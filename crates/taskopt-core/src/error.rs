//! Core domain errors.

use thiserror::Error;

/// Core domain errors for taskopt.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Task profit is NaN or infinite and cannot be used as a node weight.
    #[error("Invalid profit for task '{name}': {profit}")]
    InvalidProfit { name: String, profit: f64 },

    /// Clique search was cancelled before it could finish.
    #[error("Clique search cancelled after {branches} branches")]
    SearchCancelled { branches: u64 },
}

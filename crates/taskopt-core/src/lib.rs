//! taskopt Core Domain Types
//!
//! This crate contains the pure optimization core with no dependencies on:
//! - Network/HTTP
//! - Async runtimes
//! - Storage
//!
//! Tasks are modeled as a compatibility graph (two tasks are adjacent when they
//! share no resource) and the most profitable set of tasks that can run together
//! is found as a maximum-weight clique of that graph.

pub mod clique;
pub mod compatibility;
pub mod error;
pub mod graph;
pub mod selection;
pub mod set;
pub mod task;

// Re-export commonly used types
pub use clique::{bron_kerbosch, max_weight_clique, max_weight_clique_cancellable, Clique};
pub use compatibility::TaskCompatibilityGraph;
pub use error::CoreError;
pub use graph::{NodeId, WeightedGraph};
pub use selection::{select_higher_profit_subset, Selection};
pub use set::Set;
pub use task::Task;

//! Partition a task pool into the most profitable compatible subset and the rest.

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::{
    max_weight_clique, max_weight_clique_cancellable, CoreError, Task, TaskCompatibilityGraph,
    WeightedGraph,
};

/// Outcome of one optimization pass over a task pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Pairwise compatible tasks with the highest total profit, in pool order.
    pub selected: Vec<Task>,

    /// Every other task, in pool order.
    pub remaining: Vec<Task>,

    /// Total profit of `selected`.
    pub profit: f64,

    /// Time spent in the clique search alone.
    pub search_duration: Duration,
}

/// Build the compatibility graph of `tasks` and split it by its heaviest clique.
///
/// `selected` and `remaining` together hold exactly the input tasks. With a
/// `cancel` token the search may stop early with [`CoreError::SearchCancelled`];
/// `tasks` is only borrowed, so the caller keeps its pool intact in that case.
pub fn select_higher_profit_subset(
    tasks: &[Task],
    cancel: Option<&CancellationToken>,
) -> Result<Selection, CoreError> {
    let graph = TaskCompatibilityGraph::build(tasks);

    let started = Instant::now();
    let clique = match cancel {
        Some(token) => max_weight_clique_cancellable(&graph, token)?,
        None => max_weight_clique(&graph),
    };
    let search_duration = started.elapsed();

    let remaining = graph.nodes().difference(&clique.nodes);
    Ok(Selection {
        selected: graph.tasks_from_nodes(&clique.nodes),
        remaining: graph.tasks_from_nodes(&remaining),
        profit: clique.weight,
        search_duration,
    })
}

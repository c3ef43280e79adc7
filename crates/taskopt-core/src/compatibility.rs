//! Task compatibility graph.

use crate::{NodeId, Set, Task, WeightedGraph};

/// Graph over a fixed task list where node `i` is `tasks[i]`.
///
/// Two nodes are adjacent when their tasks share no resource. The weight of a
/// node is the profit of its task. The adjacency is symmetric and has no
/// self-loops. The graph is immutable; rebuild it when the task list changes.
#[derive(Debug, Clone)]
pub struct TaskCompatibilityGraph<'a> {
    tasks: &'a [Task],
    adjacency: Vec<Set<NodeId>>,
}

impl<'a> TaskCompatibilityGraph<'a> {
    /// Build the graph by comparing every pair of distinct tasks.
    ///
    /// O(n²) comparisons, each linear in the size of the smaller resource set.
    pub fn build(tasks: &'a [Task]) -> Self {
        let mut adjacency = vec![Set::empty(); tasks.len()];
        for (i, task) in tasks.iter().enumerate() {
            for (j, other) in tasks.iter().enumerate().skip(i + 1) {
                if task.is_compatible(other) {
                    adjacency[i].add(j);
                    adjacency[j].add(i);
                }
            }
        }

        Self { tasks, adjacency }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Set::len).sum::<usize>() / 2
    }

    /// Tasks for the given nodes, in node index order.
    ///
    /// Nodes outside the graph are skipped.
    pub fn tasks_from_nodes(&self, nodes: &Set<NodeId>) -> Vec<Task> {
        let mut indices: Vec<NodeId> = nodes
            .iter()
            .copied()
            .filter(|&node| node < self.tasks.len())
            .collect();
        indices.sort_unstable();
        indices.into_iter().map(|node| self.tasks[node].clone()).collect()
    }
}

impl WeightedGraph for TaskCompatibilityGraph<'_> {
    fn nodes(&self) -> Set<NodeId> {
        Set::of(0..self.tasks.len())
    }

    fn neighbors(&self, node: NodeId) -> Set<NodeId> {
        self.adjacency.get(node).cloned().unwrap_or_default()
    }

    fn weight(&self, node: NodeId) -> f64 {
        self.tasks.get(node).map_or(0.0, |task| task.profit)
    }
}

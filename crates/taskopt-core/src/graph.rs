//! Weighted undirected graph contract.

use crate::Set;

/// Node identifier. For task graphs this is an index into the task list.
pub type NodeId = usize;

/// Read-only view of a node-weighted undirected graph.
///
/// This is the only thing the clique search depends on, so any representation
/// (adjacency list, matrix, task compatibility graph) can be searched.
///
/// All methods are total: an unknown node has no neighbors and weight `0.0`.
pub trait WeightedGraph {
    /// The full node set.
    fn nodes(&self) -> Set<NodeId>;

    /// Nodes adjacent to `node`.
    fn neighbors(&self, node: NodeId) -> Set<NodeId>;

    /// Weight of `node`.
    fn weight(&self, node: NodeId) -> f64;
}

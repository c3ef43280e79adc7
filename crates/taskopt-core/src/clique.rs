//! Maximum-weight clique search.
//!
//! A Bron–Kerbosch enumeration without pivoting that keeps the heaviest clique
//! found in any branch. Every maximal clique is visited once, so the returned
//! weight is the true maximum regardless of the order in which [`Set::pop`]
//! yields candidates. Which clique is returned among equally heavy ones is
//! arbitrary.
//!
//! The search is exponential in the worst case and recurses once per committed
//! node, so both time and stack depth grow with the number of nodes. Callers
//! that cannot bound the input should use [`max_weight_clique_cancellable`].

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{CoreError, NodeId, Set, WeightedGraph};

/// A set of pairwise adjacent nodes and its summed weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Clique {
    pub nodes: Set<NodeId>,
    pub weight: f64,
}

impl Clique {
    /// The empty clique, weight `0.0`.
    pub fn empty() -> Self {
        Self {
            nodes: Set::empty(),
            weight: 0.0,
        }
    }
}

/// Heaviest clique extending `r` with nodes of `p`, excluding `x`.
///
/// `r` holds the nodes already committed, `p` the candidates adjacent to all of
/// `r`, and `x` the nodes already explored as branch roots.
pub fn bron_kerbosch<G: WeightedGraph + ?Sized>(
    r: Set<NodeId>,
    p: Set<NodeId>,
    x: Set<NodeId>,
    graph: &G,
) -> Clique {
    Search::new(graph, None).expand(r, p, x)
}

/// Heaviest clique of the whole graph.
///
/// Nodes with negative weight can only lower a clique's weight, so they are
/// left out of the initial candidates. The search then only reports maximal
/// cliques of the remaining nodes, and one of those is always at least as heavy
/// as any clique of the full graph. When every node is negative the empty
/// clique (weight `0.0`) wins.
pub fn max_weight_clique<G: WeightedGraph + ?Sized>(graph: &G) -> Clique {
    let mut search = Search::new(graph, None);
    let clique = search.expand(Set::empty(), candidates(graph), Set::empty());
    debug!(
        branches = search.branches,
        clique_size = clique.nodes.len(),
        weight = clique.weight,
        "Clique search finished"
    );
    clique
}

/// Like [`max_weight_clique`], but gives up once `cancel` is triggered.
///
/// The token is checked on every recursive call.
pub fn max_weight_clique_cancellable<G: WeightedGraph + ?Sized>(
    graph: &G,
    cancel: &CancellationToken,
) -> Result<Clique, CoreError> {
    let mut search = Search::new(graph, Some(cancel));
    let clique = search.expand(Set::empty(), candidates(graph), Set::empty());
    if search.cancelled {
        debug!(branches = search.branches, "Clique search cancelled");
        return Err(CoreError::SearchCancelled {
            branches: search.branches,
        });
    }

    debug!(
        branches = search.branches,
        clique_size = clique.nodes.len(),
        weight = clique.weight,
        "Clique search finished"
    );
    Ok(clique)
}

fn candidates<G: WeightedGraph + ?Sized>(graph: &G) -> Set<NodeId> {
    graph
        .nodes()
        .into_iter()
        .filter(|&node| graph.weight(node) >= 0.0)
        .collect()
}

struct Search<'a, G: ?Sized> {
    graph: &'a G,
    cancel: Option<&'a CancellationToken>,
    branches: u64,
    cancelled: bool,
}

impl<'a, G: WeightedGraph + ?Sized> Search<'a, G> {
    fn new(graph: &'a G, cancel: Option<&'a CancellationToken>) -> Self {
        Self {
            graph,
            cancel,
            branches: 0,
            cancelled: false,
        }
    }

    fn expand(&mut self, r: Set<NodeId>, mut p: Set<NodeId>, mut x: Set<NodeId>) -> Clique {
        self.branches += 1;
        if self.cancelled || self.cancel.is_some_and(CancellationToken::is_cancelled) {
            self.cancelled = true;
            return Clique::empty();
        }

        // Nothing left to add and nothing excluded could have been added: r is maximal.
        if p.is_empty() && x.is_empty() {
            let weight = r.iter().map(|&node| self.graph.weight(node)).sum();
            return Clique { nodes: r, weight };
        }

        let mut best = Clique::empty();
        while let Some(v) = p.pop() {
            let neighbors = self.graph.neighbors(v);
            let mut rv = r.clone();
            rv.add(v);

            // p and x are only changed here through pop/add; the branch gets fresh sets.
            let candidate = self.expand(rv, p.intersect(&neighbors), x.intersect(&neighbors));
            x.add(v);

            if self.cancelled {
                break;
            }
            if candidate.weight > best.weight {
                best = candidate;
            }
        }

        best
    }
}

//! Search domain contract.

use std::fmt::Debug;
use std::hash::Hash;

/// Path and edge cost. Signed so that a misconfigured domain can be
/// detected pre-flight instead of silently wrapping.
pub type Cost = i64;

/// A directed, weighted edge as seen from its source node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N> {
    pub to: N,
    pub cost: Cost,
}

impl<N> Edge<N> {
    #[must_use]
    pub fn new(to: N, cost: Cost) -> Self {
        Self { to, cost }
    }

    /// Unit-cost edge (grid moves).
    #[must_use]
    pub fn unit(to: N) -> Self {
        Self { to, cost: 1 }
    }
}

/// Trait for anything the engine can traverse.
///
/// # Contract
///
/// - `neighbors` must be deterministic: same node, same edges in the same
///   order. The order is observable (it drives DFS and all tie-breaking).
/// - `neighbors` must never yield a node for which `contains` is false.
/// - Edge costs must be non-negative. A negative cost is reported as
///   [`SearchError::NegativeEdgeCost`](crate::error::SearchError) before
///   the search loop starts.
/// - `nodes` enumerates every node of the domain; it is used only for
///   pre-flight validation.
pub trait SearchDomain {
    /// Opaque node identifier.
    type Node: Clone + Eq + Hash + Ord + Debug;

    /// Stable identifier used in logs and transcripts.
    fn domain_id(&self) -> &str;

    /// Whether `node` belongs to the domain (in bounds, not a wall).
    fn contains(&self, node: &Self::Node) -> bool;

    /// All nodes of the domain, in a deterministic order.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Outgoing edges of `node`, in a deterministic order.
    fn neighbors(&self, node: &Self::Node) -> Vec<Edge<Self::Node>>;
}

impl<D: SearchDomain + ?Sized> SearchDomain for &D {
    type Node = D::Node;

    fn domain_id(&self) -> &str {
        (**self).domain_id()
    }

    fn contains(&self, node: &Self::Node) -> bool {
        (**self).contains(node)
    }

    fn nodes(&self) -> Vec<Self::Node> {
        (**self).nodes()
    }

    fn neighbors(&self, node: &Self::Node) -> Vec<Edge<Self::Node>> {
        (**self).neighbors(node)
    }
}

//! Undirected graph with positive integer edge weights.
//!
//! Nodes are `u32` labels. Neighbors are yielded in ascending label order,
//! which fixes DFS order and tie-breaking across runs.

use std::collections::{BTreeMap, BTreeSet};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wayfinder_search::{Cost, Edge, SearchDomain};

use crate::config::{ConfigError, GraphConfig};

/// Node label.
pub type NodeId = u32;

/// Rejected edge insertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("self-loop on node {node}")]
    SelfLoop { node: NodeId },
    #[error("edge {from}-{to} has non-positive weight {weight}")]
    NonPositiveWeight {
        from: NodeId,
        to: NodeId,
        weight: Cost,
    },
}

/// Undirected simple graph with weighted edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, Cost>>,
}

impl WeightedGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with nodes `0..count` and no edges.
    #[must_use]
    pub fn with_nodes(count: u32) -> Self {
        let mut graph = Self::new();
        for node in 0..count {
            graph.add_node(node);
        }
        graph
    }

    /// Insert an isolated node. No-op if present.
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Insert or reweight the undirected edge `a`-`b`. Missing endpoints
    /// are added.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] for a self-loop or a weight below 1.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Cost) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop { node: a });
        }
        if weight < 1 {
            return Err(GraphError::NonPositiveWeight {
                from: a,
                to: b,
                weight,
            });
        }
        self.adjacency.entry(a).or_default().insert(b, weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
        Ok(())
    }

    #[must_use]
    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<Cost> {
        self.adjacency.get(&a)?.get(&b).copied()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Each undirected edge once as `(low, high, weight)`, ascending.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Cost)> + '_ {
        self.adjacency.iter().flat_map(|(&a, row)| {
            row.range(a + 1..).map(move |(&b, &weight)| (a, b, weight))
        })
    }
}

impl SearchDomain for WeightedGraph {
    type Node = NodeId;

    #[allow(clippy::unnecessary_literal_bound)]
    fn domain_id(&self) -> &str {
        "weighted_graph"
    }

    fn contains(&self, node: &NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    fn nodes(&self) -> Vec<NodeId> {
        self.adjacency.keys().copied().collect()
    }

    fn neighbors(&self, node: &NodeId) -> Vec<Edge<NodeId>> {
        self.adjacency
            .get(node)
            .into_iter()
            .flatten()
            .map(|(&to, &cost)| Edge::new(to, cost))
            .collect()
    }
}

/// Seeded connected random graph per `config`.
///
/// A random spanning tree over a shuffled node order guarantees
/// connectivity; the remaining `edge_count - (node_count - 1)` edges are
/// distinct pairs drawn uniformly from those not yet present. Weights are
/// uniform in `[min_weight, max_weight]`.
///
/// # Errors
///
/// Returns [`ConfigError`] if `config` fails validation.
pub fn generate_graph(config: &GraphConfig) -> Result<WeightedGraph, ConfigError> {
    config.validate()?;
    let too_many = || ConfigError::TooManyNodes {
        nodes: config.node_count,
    };
    let node_count = u32::try_from(config.node_count).map_err(|_| too_many())?;
    let max_edges = config.max_edges().ok_or_else(too_many)?;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let weight = |rng: &mut ChaCha8Rng| rng.gen_range(config.min_weight..=config.max_weight);

    let mut graph = WeightedGraph::with_nodes(node_count);
    let mut present: BTreeSet<(NodeId, NodeId)> = BTreeSet::new();

    let mut order: Vec<NodeId> = (0..node_count).collect();
    order.shuffle(&mut rng);
    for (i, &child) in order.iter().enumerate().skip(1) {
        let parent = order[rng.gen_range(0..i)];
        let w = weight(&mut rng);
        insert(&mut graph, &mut present, child, parent, w);
    }

    let extra = config.edge_count - present.len();
    if extra * 2 > max_edges - present.len() {
        // Dense: enumerate the complement and take a shuffled prefix.
        let mut missing: Vec<(NodeId, NodeId)> = (0..node_count)
            .flat_map(|a| (a + 1..node_count).map(move |b| (a, b)))
            .filter(|pair| !present.contains(pair))
            .collect();
        missing.shuffle(&mut rng);
        for (a, b) in missing.into_iter().take(extra) {
            let w = weight(&mut rng);
            insert(&mut graph, &mut present, a, b, w);
        }
    } else {
        while present.len() < config.edge_count {
            let a = rng.gen_range(0..node_count);
            let b = rng.gen_range(0..node_count);
            if a == b || present.contains(&ordered(a, b)) {
                continue;
            }
            let w = weight(&mut rng);
            insert(&mut graph, &mut present, a, b, w);
        }
    }

    Ok(graph)
}

fn ordered(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    (a.min(b), a.max(b))
}

fn insert(
    graph: &mut WeightedGraph,
    present: &mut BTreeSet<(NodeId, NodeId)>,
    a: NodeId,
    b: NodeId,
    weight: Cost,
) {
    present.insert(ordered(a, b));
    graph.adjacency.entry(a).or_default().insert(b, weight);
    graph.adjacency.entry(b).or_default().insert(a, weight);
}

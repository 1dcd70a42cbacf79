//! Single source of truth for lock-test worlds.
//!
//! Used by both the `search_fixture` binary and the integration tests, so
//! the worlds the cross-process check hashes are the same worlds the
//! in-process tests assert on.

use std::collections::BTreeMap;

use wayfinder_harness::{Grid, GraphConfig, GridConfig, NodeId, WeightedGraph};
use wayfinder_search::Cost;

/// Seeded grid printed by the fixture binary (default size and density).
#[must_use]
pub fn fixture_grid_config() -> GridConfig {
    GridConfig {
        seed: 7,
        ..GridConfig::default()
    }
}

/// Seeded graph printed by the fixture binary (default size and weights).
#[must_use]
pub fn fixture_graph_config() -> GraphConfig {
    GraphConfig {
        seed: 7,
        ..GraphConfig::default()
    }
}

/// 3x3 open grid, start top-left, goal bottom-right.
///
/// # Panics
///
/// Never; the dimensions are non-zero.
#[must_use]
pub fn open_three_by_three() -> Grid {
    Grid::open(3, 3).expect("3x3 is a valid grid")
}

/// Start boxed in by walls; the goal is unreachable.
///
/// # Panics
///
/// Never; the literal is well-formed.
#[must_use]
pub fn enclosed_start() -> Grid {
    Grid::parse(
        "
        .#...
        #S#..
        .#...
        ....G
        ",
    )
    .expect("enclosed-start literal parses")
}

/// Two nodes joined by one edge of weight 7.
///
/// # Panics
///
/// Never; the edge is valid.
#[must_use]
pub fn two_node_weighted() -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    graph.add_edge(0, 1, 7).expect("positive weight, distinct nodes");
    graph
}

/// Shortest-path distances from `start` by Bellman-Ford relaxation.
///
/// Independent of the engine: no frontier, no records, just `|V| - 1`
/// rounds over the undirected edge list. Unreachable nodes are absent.
#[must_use]
pub fn bellman_ford(graph: &WeightedGraph, start: NodeId) -> BTreeMap<NodeId, Cost> {
    let mut dist: BTreeMap<NodeId, Cost> = BTreeMap::from([(start, 0)]);
    let edges: Vec<(NodeId, NodeId, Cost)> = graph.edges().collect();
    for _ in 1..graph.node_count().max(2) {
        let mut changed = false;
        for &(a, b, w) in &edges {
            for (from, to) in [(a, b), (b, a)] {
                let Some(&d) = dist.get(&from) else { continue };
                let candidate = d + w;
                if dist.get(&to).map_or(true, |&current| candidate < current) {
                    dist.insert(to, candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bellman_ford_on_triangle() {
        let mut graph = WeightedGraph::new();
        graph.add_edge(0, 1, 2).unwrap();
        graph.add_edge(1, 2, 2).unwrap();
        graph.add_edge(0, 2, 7).unwrap();
        graph.add_node(5);
        let dist = bellman_ford(&graph, 0);
        assert_eq!(dist, BTreeMap::from([(0, 0), (1, 2), (2, 4)]));
    }
}

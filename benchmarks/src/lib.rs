//! Shared helpers for wayfinder benchmark suites.

use wayfinder_harness::{
    generate_graph, generate_grid, GraphConfig, Grid, GridConfig, NodeId, WeightedGraph,
};

/// Wall density used by the grid regimes. Low enough that most seeds are
/// solvable, high enough that A* and BFS diverge.
pub const BENCH_WALL_PROBABILITY: f64 = 0.2;

/// Fixed seed for every benchmark world.
pub const BENCH_SEED: u64 = 0xB0B;

/// Square grid of side `side`, seeded.
///
/// # Panics
///
/// Panics if `side` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn bench_grid(side: usize) -> Grid {
    generate_grid(&GridConfig {
        rows: side,
        cols: side,
        wall_probability: BENCH_WALL_PROBABILITY,
        seed: BENCH_SEED,
    })
    .expect("bench grid config")
}

/// Connected graph with `nodes` nodes and twice as many edges, seeded.
///
/// # Panics
///
/// Panics if the node count cannot carry `2 * nodes` edges.
#[must_use]
pub fn bench_graph(nodes: usize) -> WeightedGraph {
    generate_graph(&GraphConfig {
        node_count: nodes,
        edge_count: nodes * 2,
        seed: BENCH_SEED,
        ..GraphConfig::default()
    })
    .expect("bench graph config")
}

/// Goal used for a graph of `nodes` nodes: the highest label.
///
/// # Panics
///
/// Panics if `nodes` is zero or exceeds the label space.
#[must_use]
pub fn graph_goal(nodes: usize) -> NodeId {
    NodeId::try_from(nodes - 1).expect("node label fits u32")
}

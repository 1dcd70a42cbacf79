//! Wayfinder Harness: worlds, generators and instrumentation for the
//! search engine.
//!
//! The harness supplies the concrete domains (a walled grid and a weighted
//! graph), seeded generators for both, sinks that observe a run (a grid
//! canvas and a transcript recorder), and a runner that times and compares
//! strategies.
//!
//! The harness does NOT implement search logic; it delegates to
//! `wayfinder_search`. Worlds provide domain data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analysis;
pub mod canvas;
pub mod config;
pub mod runner;
pub mod transcript;
pub mod worlds;

pub use analysis::{bfs_levels, traversal_order};
pub use canvas::{GridCanvas, Mark};
pub use config::{ConfigError, GraphConfig, GridConfig};
pub use runner::{
    compare_on_graph, compare_on_grid, compare_strategies, run_strategy, RunError, RunReport,
};
pub use transcript::{RecordingSink, Transcript, TranscriptNode};
pub use worlds::grid::{generate_grid, Cell, CellKind, Grid, ManhattanHeuristic};
pub use worlds::weighted_graph::{generate_graph, NodeId, WeightedGraph};

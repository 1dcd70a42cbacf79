//! Search domains the harness can generate and run.

pub mod grid;
pub mod weighted_graph;

//! Wayfinder Search: one deterministic traversal engine for BFS, DFS,
//! uniform-cost search and A*.
//!
//! The four strategies are configurations of a single loop: a frontier
//! ordering policy plus a cost model. The engine emits an event stream for
//! instrumentation and never depends on a renderer.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfinder_search  ←  wayfinder_harness
//! (engine, traits)     (grid, graph, generators, sinks, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchDomain`]: nodes and weighted neighbor edges
//! - [`Heuristic`]: optional node-to-goal estimate (A* only)
//! - [`Strategy`]: frontier policy selection (`Bfs`, `Dfs`, `Ucs`, `AStar`)
//! - [`SearchRun`]: the lazy expansion loop
//! - [`StepEvent`] / [`Outcome`]: observable progress and terminal result
//! - [`InstrumentationSink`]: passive event consumer
//! - [`Path`]: immutable start-to-goal node sequence

#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod event;
pub mod frontier;
pub mod heuristic;
pub mod path;
pub mod policy;
pub mod record;
pub mod search;

pub use domain::{Cost, Edge, SearchDomain};
pub use error::SearchError;
pub use event::{InstrumentationSink, NullSink, Outcome, StepEvent};
pub use heuristic::{Heuristic, ZeroHeuristic};
pub use path::Path;
pub use policy::{SearchPolicy, Strategy};
pub use search::{explore, search, search_with_sink, SearchRun, SearchStats};

//! Generation parameters for the grid and graph collaborators.
//!
//! Configs are plain data with defaults matching the reference scripts.
//! `validate()` is called by the generators before any randomness is drawn.

use wayfinder_search::Cost;

/// Default grid side length.
const DEFAULT_GRID_SIDE: usize = 20;
/// Default per-cell wall probability.
const DEFAULT_WALL_PROBABILITY: f64 = 0.25;
const DEFAULT_NODE_COUNT: usize = 50;
const DEFAULT_EDGE_COUNT: usize = 100;
const DEFAULT_MIN_WEIGHT: Cost = 1;
const DEFAULT_MAX_WEIGHT: Cost = 10;

/// Invalid generation parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("wall probability must be in [0, 1), got {value}")]
    WallProbability { value: f64 },

    #[error("graph must have at least one node")]
    EmptyGraph,

    #[error("{nodes} nodes exceed the u32 label space")]
    TooManyNodes { nodes: usize },

    #[error("{edges} edges cannot connect {nodes} nodes (need at least {min})")]
    TooFewEdges { nodes: usize, edges: usize, min: usize },

    #[error("{edges} edges exceed the {max} possible in a simple graph on {nodes} nodes")]
    TooManyEdges { nodes: usize, edges: usize, max: usize },

    #[error("weight range [{min}, {max}] must be non-empty and positive")]
    WeightRange { min: Cost, max: Cost },
}

/// Parameters for [`generate_grid`](crate::worlds::grid::generate_grid).
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Independent per-cell wall probability, `0 <= p < 1`.
    pub wall_probability: f64,
    pub seed: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_GRID_SIDE,
            cols: DEFAULT_GRID_SIDE,
            wall_probability: DEFAULT_WALL_PROBABILITY,
            seed: 0,
        }
    }
}

impl GridConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty grid or a wall probability
    /// outside `[0, 1)`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if !(0.0..1.0).contains(&self.wall_probability) {
            return Err(ConfigError::WallProbability {
                value: self.wall_probability,
            });
        }
        Ok(())
    }
}

/// Parameters for [`generate_graph`](crate::worlds::weighted_graph::generate_graph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    pub node_count: usize,
    /// Undirected edge count; must allow a connected simple graph.
    pub edge_count: usize,
    pub min_weight: Cost,
    pub max_weight: Cost,
    pub seed: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            edge_count: DEFAULT_EDGE_COUNT,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            seed: 0,
        }
    }
}

impl GraphConfig {
    /// Largest edge count of a simple undirected graph on `node_count` nodes,
    /// or `None` if that count does not fit in `usize`.
    #[must_use]
    pub fn max_edges(&self) -> Option<usize> {
        self.node_count
            .checked_mul(self.node_count.saturating_sub(1))
            .map(|pairs| pairs / 2)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError`] if the graph is empty or too large to label,
    /// cannot be connected with `edge_count` edges, cannot hold that many
    /// edges, or the weight range is empty or non-positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_count == 0 {
            return Err(ConfigError::EmptyGraph);
        }
        let too_many = ConfigError::TooManyNodes {
            nodes: self.node_count,
        };
        if u32::try_from(self.node_count).is_err() {
            return Err(too_many);
        }
        let min = self.node_count - 1;
        if self.edge_count < min {
            return Err(ConfigError::TooFewEdges {
                nodes: self.node_count,
                edges: self.edge_count,
                min,
            });
        }
        let max = self.max_edges().ok_or(too_many)?;
        if self.edge_count > max {
            return Err(ConfigError::TooManyEdges {
                nodes: self.node_count,
                edges: self.edge_count,
                max,
            });
        }
        if self.min_weight < 1 || self.min_weight > self.max_weight {
            return Err(ConfigError::WeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        Ok(())
    }
}

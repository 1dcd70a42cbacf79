//! Search strategy and policy types.

use std::fmt;
use std::str::FromStr;

use crate::frontier::{Frontier, MinKeyFrontier, QueueFrontier, StackFrontier};

/// The four traversal strategies, expressed as configurations of one engine.
///
/// | Strategy | Frontier | Priority key | Revisits |
/// |---|---|---|---|
/// | `Bfs` | FIFO queue | n/a | no (mark on enqueue) |
/// | `Dfs` | LIFO stack | n/a | no (mark on enqueue) |
/// | `Ucs` | min-heap | `g` | on strict cost improvement |
/// | `AStar` | min-heap | `g + h` | on strict cost improvement |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strategy {
    Bfs,
    Dfs,
    Ucs,
    AStar,
}

impl Strategy {
    /// All strategies in canonical order.
    pub const ALL: [Strategy; 4] = [Self::Bfs, Self::Dfs, Self::Ucs, Self::AStar];

    /// Build an empty frontier with this strategy's ordering policy.
    #[must_use]
    pub fn frontier<'a, N: 'a>(self) -> Box<dyn Frontier<N> + 'a> {
        match self {
            Self::Bfs => Box::new(QueueFrontier::new()),
            Self::Dfs => Box::new(StackFrontier::new()),
            Self::Ucs | Self::AStar => Box::new(MinKeyFrontier::new()),
        }
    }

    /// Whether a discovered node may be re-pushed with a cheaper cost.
    ///
    /// BFS/DFS settle a node the first time it is discovered.
    #[must_use]
    pub fn is_cost_aware(self) -> bool {
        matches!(self, Self::Ucs | Self::AStar)
    }

    /// Whether the priority key includes the heuristic estimate.
    #[must_use]
    pub fn uses_heuristic(self) -> bool {
        matches!(self, Self::AStar)
    }

    /// Short lowercase name (`"bfs"`, `"dfs"`, `"ucs"`, `"astar"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Ucs => "ucs",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search strategy: {0:?}")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "ucs" | "dijkstra" => Ok(Self::Ucs),
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Engine configuration, checked before the search loop starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions, the start node included. `None` means
    /// unbounded.
    pub max_expansions: Option<u64>,
    /// Verify heuristic consistency on every edge before an A* run.
    ///
    /// Consistency together with `h(goal) = 0` implies admissibility, so a
    /// run that passes this check returns optimal paths.
    pub check_heuristic: bool,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            check_heuristic: true,
        }
    }
}

impl SearchPolicy {
    /// Policy with an expansion budget.
    #[must_use]
    pub fn with_max_expansions(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..Self::default()
        }
    }
}

//! Node-to-goal cost estimates.

use crate::domain::Cost;

/// Estimate of the remaining cost from `node` to `goal`.
///
/// Only [`Strategy::AStar`](crate::policy::Strategy::AStar) consults the
/// heuristic. For A* to return optimal paths the estimate must be
/// admissible and consistent; see
/// [`SearchPolicy::check_heuristic`](crate::policy::SearchPolicy).
pub trait Heuristic<N> {
    fn estimate(&self, node: &N, goal: &N) -> Cost;
}

/// The identity heuristic: always 0. Turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<N> Heuristic<N> for ZeroHeuristic {
    fn estimate(&self, _node: &N, _goal: &N) -> Cost {
        0
    }
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N, &N) -> Cost,
{
    fn estimate(&self, node: &N, goal: &N) -> Cost {
        self(node, goal)
    }
}

//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures and internal invariant
//! violations only. Normal terminations (goal found, frontier exhausted,
//! expansion budget hit) are expressed via [`crate::event::Outcome`].

use crate::domain::Cost;

/// Typed failure for search configuration and engine bookkeeping.
///
/// Configuration variants are returned before the first
/// [`StepEvent`](crate::event::StepEvent) is emitted. Node identifiers are
/// rendered with `Debug` so the error type stays independent of the domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start node is not part of the domain.
    #[error("start node {node} is outside the domain")]
    StartOutOfBounds { node: String },

    /// The goal node is not part of the domain.
    #[error("goal node {node} is outside the domain")]
    GoalOutOfBounds { node: String },

    /// The domain exposes an edge with a negative cost.
    #[error("edge {from} -> {to} has negative cost {cost}")]
    NegativeEdgeCost { from: String, to: String, cost: Cost },

    /// The heuristic returned a negative estimate.
    #[error("heuristic is negative at {node}: {estimate}")]
    NegativeHeuristic { node: String, estimate: Cost },

    /// The heuristic does not evaluate to zero at the goal.
    #[error("heuristic must be zero at the goal, got {estimate}")]
    NonZeroHeuristicAtGoal { estimate: Cost },

    /// `h(from) > cost(from, to) + h(to)` for some edge.
    #[error("heuristic is inconsistent across edge {from} -> {to}")]
    InconsistentHeuristic { from: String, to: String },

    /// A path cost or priority key left the `Cost` range mid-run.
    #[error("cost of reaching {node} overflows")]
    CostOverflow { node: String },

    /// A sink-driven run ended without a terminal event.
    #[error("search run ended without a terminal event")]
    MissingTerminalEvent,

    /// Engine bookkeeping is corrupt (e.g. a broken parent chain).
    #[error("search invariant violated: {detail}")]
    InvariantViolation { detail: String },
}

impl SearchError {
    /// Whether this error was detected before the first event.
    ///
    /// `CostOverflow` is caused by the caller's costs but only surfaces once
    /// the run reaches the overflowing edge.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        !matches!(
            self,
            Self::CostOverflow { .. } | Self::InvariantViolation { .. } | Self::MissingTerminalEvent
        )
    }
}

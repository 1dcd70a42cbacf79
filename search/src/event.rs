//! Step events, terminal outcomes, and the instrumentation sink trait.
//!
//! The engine never renders. It emits an ordered stream of [`StepEvent`]s:
//! zero or more `Expanded` events followed by exactly one terminal event.
//! Anything that wants to observe a run (a visualizer, a recorder, a test)
//! implements [`InstrumentationSink`] or pulls events from
//! [`SearchRun`](crate::search::SearchRun) directly.

use crate::domain::Cost;
use crate::path::Path;

/// Terminal result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<N> {
    /// The goal was popped from the frontier.
    Found { path: Path<N>, cost: Cost },
    /// The frontier emptied before the goal was reached. Not an error.
    Exhausted,
    /// The policy's expansion budget ran out first.
    BudgetExceeded { expansions: u64 },
}

impl<N> Outcome<N> {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path<N>> {
        match self {
            Self::Found { path, .. } => Some(path),
            _ => None,
        }
    }

    #[must_use]
    pub fn cost(&self) -> Option<Cost> {
        match self {
            Self::Found { cost, .. } => Some(*cost),
            _ => None,
        }
    }

    /// Stable lowercase tag (`"found"`, `"exhausted"`, `"budget_exceeded"`).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Found { .. } => "found",
            Self::Exhausted => "exhausted",
            Self::BudgetExceeded { .. } => "budget_exceeded",
        }
    }
}

/// One unit of observable progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent<N> {
    /// A node was popped and its successors generated.
    ///
    /// Not emitted for the start node, and never for the goal (the goal
    /// terminates the run when popped).
    Expanded {
        /// 0-based position in the expansion stream.
        order: u64,
        node: N,
        cost_so_far: Cost,
        /// Edge count from start along the recorded parent chain.
        depth: u32,
    },
    /// The run ended normally. On success the outcome owns the full path.
    Final(Outcome<N>),
    /// The run cannot continue: a cost overflowed or engine bookkeeping is
    /// corrupt. Always terminal; `detail` is the rendered [`SearchError`](crate::error::SearchError).
    Aborted { detail: String },
}

impl<N> StepEvent<N> {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Expanded { .. })
    }

    /// The expanded node, if this is an expansion event.
    #[must_use]
    pub fn expanded_node(&self) -> Option<&N> {
        match self {
            Self::Expanded { node, .. } => Some(node),
            _ => None,
        }
    }
}

/// Passive consumer of a search's event stream.
pub trait InstrumentationSink<N> {
    /// Called once per event, in emission order.
    fn on_event(&mut self, event: &StepEvent<N>);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl<N> InstrumentationSink<N> for NullSink {
    fn on_event(&mut self, _event: &StepEvent<N>) {}
}

impl<N, F> InstrumentationSink<N> for F
where
    F: FnMut(&StepEvent<N>),
{
    fn on_event(&mut self, event: &StepEvent<N>) {
        self(event);
    }
}

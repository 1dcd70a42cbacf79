//! Harness runner: executes strategies on a domain and reports results.
//!
//! Every run goes through the same pipeline:
//!
//! ```text
//! SearchRun::new() (pre-flight) → drain events → RecordingSink
//!   → Transcript → digest → RunReport
//! ```
//!
//! The runner adds timing and transcript hashing on top of the engine; it
//! never interprets events beyond collecting the terminal outcome.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::info;
use wayfinder_search::{
    Heuristic, InstrumentationSink, Outcome, SearchDomain, SearchError, SearchPolicy, SearchRun,
    SearchStats, StepEvent, Strategy, ZeroHeuristic,
};

use crate::config::{ConfigError, GraphConfig, GridConfig};
use crate::transcript::{RecordingSink, TranscriptNode};
use crate::worlds::grid::{generate_grid, Cell, ManhattanHeuristic};
use crate::worlds::weighted_graph::{generate_graph, NodeId};

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RunError {
    #[error("invalid world config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Result of one strategy on one domain.
#[derive(Debug, Clone)]
pub struct RunReport<N> {
    pub strategy: Strategy,
    pub domain_id: String,
    pub outcome: Outcome<N>,
    /// Start node followed by every expanded node, in order.
    pub visit_order: Vec<N>,
    pub stats: SearchStats,
    /// Wall time from pre-flight to terminal event, recording included.
    pub elapsed: Duration,
    /// `"sha256:<hex>"` of the run's canonical transcript.
    pub transcript_digest: String,
}

impl<N> RunReport<N> {
    /// Node count of the found path, or 0.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.outcome.path().map_or(0, wayfinder_search::Path::len)
    }
}

impl<N> fmt::Display for RunReport<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<5} {:<15} visited={:<5} path_len={:<4}",
            self.strategy.as_str(),
            self.outcome.kind(),
            self.visit_order.len(),
            self.path_len(),
        )?;
        if let Some(cost) = self.outcome.cost() {
            write!(f, " cost={cost}")?;
        }
        write!(f, " time={:?}", self.elapsed)
    }
}

/// Run one strategy from `start` to `goal` and report.
///
/// # Errors
///
/// Returns [`RunError::Search`] for a configuration error (before any
/// event) or an engine invariant violation.
pub fn run_strategy<D, H>(
    domain: &D,
    start: D::Node,
    goal: D::Node,
    strategy: Strategy,
    heuristic: H,
    policy: &SearchPolicy,
) -> Result<RunReport<D::Node>, RunError>
where
    D: SearchDomain,
    D::Node: TranscriptNode,
    H: Heuristic<D::Node>,
{
    let started = Instant::now();
    let mut run = SearchRun::new(
        domain,
        start.clone(),
        goal,
        strategy,
        heuristic,
        policy.clone(),
    )?;

    let mut recorder = RecordingSink::new();
    let mut outcome = None;
    for event in run.by_ref() {
        recorder.on_event(&event);
        if let StepEvent::Final(terminal) = event {
            outcome = Some(terminal);
        }
    }
    if let Some(err) = run.failure() {
        return Err(err.clone().into());
    }
    let elapsed = started.elapsed();
    let outcome = outcome.ok_or(SearchError::MissingTerminalEvent)?;
    let stats = run.stats();

    let transcript = recorder.into_transcript(domain.domain_id(), strategy);
    let visit_order: Vec<D::Node> = std::iter::once(start)
        .chain(transcript.expanded().cloned())
        .collect();
    let transcript_digest = transcript.digest();

    info!(
        domain = domain.domain_id(),
        %strategy,
        outcome = outcome.kind(),
        cost = ?outcome.cost(),
        expansions = stats.expansions,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "strategy run complete"
    );

    Ok(RunReport {
        strategy,
        domain_id: domain.domain_id().to_string(),
        outcome,
        visit_order,
        stats,
        elapsed,
        transcript_digest,
    })
}

/// Run all four strategies in [`Strategy::ALL`] order.
///
/// The heuristic only affects `AStar`; the other strategies ignore it.
///
/// # Errors
///
/// Returns the first [`RunError`]; later strategies are not run.
pub fn compare_strategies<D, H>(
    domain: &D,
    start: &D::Node,
    goal: &D::Node,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<Vec<RunReport<D::Node>>, RunError>
where
    D: SearchDomain,
    D::Node: TranscriptNode,
    H: Heuristic<D::Node> + Clone,
{
    Strategy::ALL
        .iter()
        .map(|&strategy| {
            run_strategy(
                domain,
                start.clone(),
                goal.clone(),
                strategy,
                heuristic.clone(),
                policy,
            )
        })
        .collect()
}

/// Generate a grid and compare all strategies corner to corner, with
/// Manhattan distance for A*.
///
/// # Errors
///
/// Returns [`RunError::Config`] for an invalid `config`, otherwise as
/// [`compare_strategies`].
pub fn compare_on_grid(
    config: &GridConfig,
    policy: &SearchPolicy,
) -> Result<Vec<RunReport<Cell>>, RunError> {
    let grid = generate_grid(config)?;
    compare_strategies(
        &grid,
        &grid.start(),
        &grid.goal(),
        &ManhattanHeuristic,
        policy,
    )
}

/// Generate a graph and compare all strategies from node 0 to the highest
/// label, with the zero heuristic for A*.
///
/// # Errors
///
/// Returns [`RunError::Config`] for an invalid `config`, otherwise as
/// [`compare_strategies`].
pub fn compare_on_graph(
    config: &GraphConfig,
    policy: &SearchPolicy,
) -> Result<Vec<RunReport<NodeId>>, RunError> {
    let graph = generate_graph(config)?;
    let goal = NodeId::try_from(config.node_count - 1)
        .map_err(|_| ConfigError::TooManyNodes {
            nodes: config.node_count,
        })?;
    compare_strategies(&graph, &0, &goal, &ZeroHeuristic, policy)
}

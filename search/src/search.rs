//! Search entry points and the expansion loop.
//!
//! BFS, DFS, UCS and A* share this loop; a [`Strategy`] only selects the
//! frontier ordering, whether discovered nodes may be re-pushed at a lower
//! cost, and whether the heuristic contributes to the priority key.

use tracing::{debug, trace};

use crate::domain::{Cost, SearchDomain};
use crate::error::SearchError;
use crate::event::{InstrumentationSink, NullSink, Outcome, StepEvent};
use crate::frontier::{Frontier, FrontierEntry};
use crate::heuristic::{Heuristic, ZeroHeuristic};
use crate::path::reconstruct_path;
use crate::policy::{SearchPolicy, Strategy};
use crate::record::{Discovery, RecordArena, RecordId, Visitation};

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes expanded, start included.
    pub expansions: u64,
    /// Frontier pushes, start included.
    pub pushes: u64,
    /// Min-key entries discarded because a cheaper entry was already settled.
    pub stale_pops: u64,
    /// Distinct nodes touched.
    pub records: usize,
    pub frontier_high_water: usize,
}

/// An in-flight search, yielding [`StepEvent`]s lazily.
///
/// All configuration checks run in the constructor, so a constructed run
/// never fails with a configuration error. The iterator yields zero or more
/// `Expanded` events, then exactly one terminal event, then `None`.
/// Dropping the run early is cooperative cancellation; it holds no
/// external resources.
pub struct SearchRun<'a, D: SearchDomain + 'a, H> {
    domain: &'a D,
    strategy: Strategy,
    heuristic: H,
    policy: SearchPolicy,
    start: D::Node,
    /// `None` in explore mode: traverse the whole reachable component.
    goal: Option<D::Node>,
    frontier: Box<dyn Frontier<D::Node> + 'a>,
    arena: RecordArena<D::Node>,
    stats: SearchStats,
    reported: u64,
    finished: bool,
    /// Set when the run ends with `Aborted`.
    failure: Option<SearchError>,
}

impl<'a, D, H> SearchRun<'a, D, H>
where
    D: SearchDomain + 'a,
    H: Heuristic<D::Node>,
{
    /// Validate the configuration and seed the frontier with `start`.
    ///
    /// # Errors
    ///
    /// Returns a configuration [`SearchError`] if `start` or `goal` lies
    /// outside the domain, any edge has a negative cost, or (A* with
    /// `policy.check_heuristic`) the heuristic is negative, non-zero at the
    /// goal, or inconsistent on some edge.
    pub fn new(
        domain: &'a D,
        start: D::Node,
        goal: D::Node,
        strategy: Strategy,
        heuristic: H,
        policy: SearchPolicy,
    ) -> Result<Self, SearchError> {
        if !domain.contains(&goal) {
            return Err(SearchError::GoalOutOfBounds {
                node: format!("{goal:?}"),
            });
        }
        Self::build(domain, start, Some(goal), strategy, heuristic, policy)
    }

    fn build(
        domain: &'a D,
        start: D::Node,
        goal: Option<D::Node>,
        strategy: Strategy,
        heuristic: H,
        policy: SearchPolicy,
    ) -> Result<Self, SearchError> {
        if !domain.contains(&start) {
            return Err(SearchError::StartOutOfBounds {
                node: format!("{start:?}"),
            });
        }
        let check_heuristic = strategy.uses_heuristic() && policy.check_heuristic;
        preflight(domain, goal.as_ref().filter(|_| check_heuristic), &heuristic)?;

        debug!(
            domain = domain.domain_id(),
            %strategy,
            start = ?start,
            goal = ?goal,
            "search started"
        );

        let mut run = Self {
            domain,
            strategy,
            heuristic,
            policy,
            start: start.clone(),
            goal,
            frontier: strategy.frontier(),
            arena: RecordArena::new(),
            stats: SearchStats::default(),
            reported: 0,
            finished: false,
            failure: None,
        };
        run.arena.insert_root(start.clone());
        let priority = run.priority(&start, 0)?;
        run.push(FrontierEntry::new(priority, 0, start, None));
        Ok(run)
    }

    /// Strategy this run was configured with.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Counters so far; final once the terminal event has been yielded.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            records: self.arena.len(),
            frontier_high_water: self.frontier.high_water(),
            ..self.stats
        }
    }

    /// Records touched so far.
    #[must_use]
    pub fn records(&self) -> &RecordArena<D::Node> {
        &self.arena
    }

    /// Whether the terminal event has been yielded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The error behind an `Aborted` terminal event, if one was yielded.
    #[must_use]
    pub fn failure(&self) -> Option<&SearchError> {
        self.failure.as_ref()
    }

    fn priority(&self, node: &D::Node, cost: Cost) -> Result<Cost, SearchError> {
        match &self.goal {
            Some(goal) if self.strategy.uses_heuristic() => cost
                .checked_add(self.heuristic.estimate(node, goal))
                .ok_or_else(|| overflow(node)),
            _ => Ok(cost),
        }
    }

    fn push(&mut self, entry: FrontierEntry<D::Node>) {
        self.frontier.push(entry);
        self.stats.pushes += 1;
    }

    fn finish(&mut self, event: StepEvent<D::Node>) -> StepEvent<D::Node> {
        self.finished = true;
        let stats = self.stats();
        match &event {
            StepEvent::Final(outcome) => debug!(
                outcome = outcome.kind(),
                cost = ?outcome.cost(),
                expansions = stats.expansions,
                records = stats.records,
                frontier_high_water = stats.frontier_high_water,
                "search finished"
            ),
            StepEvent::Aborted { detail } => debug!(%detail, "search aborted"),
            StepEvent::Expanded { .. } => {}
        }
        event
    }

    fn abort(&mut self, err: SearchError) -> StepEvent<D::Node> {
        let event = StepEvent::Aborted {
            detail: err.to_string(),
        };
        self.failure = Some(err);
        self.finish(event)
    }

    /// Generate successors of a popped node, pushing improved discoveries.
    fn expand(&mut self, node: &D::Node, cost: Cost, id: RecordId) -> Result<(), SearchError> {
        for edge in self.domain.neighbors(node) {
            if !self.strategy.is_cost_aware() && self.arena.contains(&edge.to) {
                continue;
            }
            let candidate = cost
                .checked_add(edge.cost)
                .ok_or_else(|| overflow(&edge.to))?;
            match self.arena.discover(edge.to.clone(), candidate, Some(id)) {
                Discovery::New(_) | Discovery::Improved(_) => {
                    let priority = self.priority(&edge.to, candidate)?;
                    self.push(FrontierEntry::new(priority, candidate, edge.to, Some(id)));
                }
                Discovery::Rejected(_) => {}
            }
        }
        Ok(())
    }

    fn step(&mut self) -> StepEvent<D::Node> {
        loop {
            let Some(entry) = self.frontier.pop() else {
                return self.finish(StepEvent::Final(Outcome::Exhausted));
            };

            let Some(id) = self.arena.id_of(&entry.node) else {
                return self.abort(SearchError::InvariantViolation {
                    detail: format!("popped {:?} without a search record", entry.node),
                });
            };
            let Some(record) = self.arena.get(id) else {
                return self.abort(SearchError::InvariantViolation {
                    detail: format!("record {} missing from arena", id.index()),
                });
            };
            let (recorded_cost, status, depth) = (record.cost, record.status, record.depth);
            let recorded_parent = record.parent;

            if self.strategy.is_cost_aware()
                && (entry.cost > recorded_cost || status == Visitation::Settled)
            {
                self.stats.stale_pops += 1;
                continue;
            }

            // A live entry is the one that last wrote its node's record.
            if entry.parent != recorded_parent {
                return self.abort(SearchError::InvariantViolation {
                    detail: format!(
                        "frontier entry for {:?} disagrees with its record",
                        entry.node
                    ),
                });
            }

            if self.goal.as_ref() == Some(&entry.node) {
                return match reconstruct_path(&self.arena, &entry.node) {
                    Ok(path) => self.finish(StepEvent::Final(Outcome::Found {
                        path,
                        cost: recorded_cost,
                    })),
                    Err(err) => self.abort(err),
                };
            }

            if let Some(max) = self.policy.max_expansions {
                if self.stats.expansions >= max {
                    let expansions = self.stats.expansions;
                    return self.finish(StepEvent::Final(Outcome::BudgetExceeded { expansions }));
                }
            }

            self.arena.settle(id);
            self.stats.expansions += 1;
            if let Err(err) = self.expand(&entry.node, recorded_cost, id) {
                return self.abort(err);
            }

            if entry.node == self.start {
                continue;
            }

            let order = self.reported;
            self.reported += 1;
            trace!(order, node = ?entry.node, cost = recorded_cost, depth, "expanded");
            return StepEvent::Expanded {
                order,
                node: entry.node,
                cost_so_far: recorded_cost,
                depth,
            };
        }
    }
}

impl<'a, D> SearchRun<'a, D, ZeroHeuristic>
where
    D: SearchDomain + 'a,
{
    /// A goal-less run that traverses every node reachable from `start`.
    ///
    /// Terminates with [`Outcome::Exhausted`] (or `BudgetExceeded`).
    ///
    /// # Errors
    ///
    /// Same configuration errors as [`SearchRun::new`], minus the goal and
    /// heuristic checks.
    pub fn explore(
        domain: &'a D,
        start: D::Node,
        strategy: Strategy,
        policy: SearchPolicy,
    ) -> Result<Self, SearchError> {
        Self::build(domain, start, None, strategy, ZeroHeuristic, policy)
    }
}

impl<'a, D, H> Iterator for SearchRun<'a, D, H>
where
    D: SearchDomain + 'a,
    H: Heuristic<D::Node>,
{
    type Item = StepEvent<D::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        Some(self.step())
    }
}

impl<'a, D, H> std::iter::FusedIterator for SearchRun<'a, D, H>
where
    D: SearchDomain + 'a,
    H: Heuristic<D::Node>,
{
}

fn overflow<N: std::fmt::Debug>(node: &N) -> SearchError {
    SearchError::CostOverflow {
        node: format!("{node:?}"),
    }
}

/// Reject domains and heuristics that would void the engine's guarantees.
///
/// `heuristic_goal` is `Some` only when the heuristic must be checked.
fn preflight<D, H>(
    domain: &D,
    heuristic_goal: Option<&D::Node>,
    heuristic: &H,
) -> Result<(), SearchError>
where
    D: SearchDomain,
    H: Heuristic<D::Node>,
{
    if let Some(goal) = heuristic_goal {
        let at_goal = heuristic.estimate(goal, goal);
        if at_goal != 0 {
            return Err(SearchError::NonZeroHeuristicAtGoal { estimate: at_goal });
        }
    }

    for node in domain.nodes() {
        let h_node = heuristic_goal.map(|goal| heuristic.estimate(&node, goal));
        if let Some(estimate) = h_node.filter(|h| *h < 0) {
            return Err(SearchError::NegativeHeuristic {
                node: format!("{node:?}"),
                estimate,
            });
        }
        for edge in domain.neighbors(&node) {
            if edge.cost < 0 {
                return Err(SearchError::NegativeEdgeCost {
                    from: format!("{node:?}"),
                    to: format!("{:?}", edge.to),
                    cost: edge.cost,
                });
            }
            if let (Some(goal), Some(h_from)) = (heuristic_goal, h_node) {
                let h_to = heuristic.estimate(&edge.to, goal);
                if edge.cost.checked_add(h_to).is_some_and(|bound| h_from > bound) {
                    return Err(SearchError::InconsistentHeuristic {
                        from: format!("{node:?}"),
                        to: format!("{:?}", edge.to),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Pull every event from `run` into `sink` and return the terminal outcome.
fn drive<'a, D, H>(
    run: &mut SearchRun<'a, D, H>,
    sink: &mut dyn InstrumentationSink<D::Node>,
) -> Result<Outcome<D::Node>, SearchError>
where
    D: SearchDomain + 'a,
    H: Heuristic<D::Node>,
{
    for event in run.by_ref() {
        sink.on_event(&event);
        if let StepEvent::Final(outcome) = event {
            return Ok(outcome);
        }
    }
    Err(run
        .failure
        .take()
        .unwrap_or(SearchError::MissingTerminalEvent))
}

/// Search from `start` to `goal` with the default policy and no sink.
///
/// # Errors
///
/// See [`search_with_sink`].
pub fn search<D, H>(
    domain: &D,
    start: D::Node,
    goal: D::Node,
    strategy: Strategy,
    heuristic: H,
) -> Result<Outcome<D::Node>, SearchError>
where
    D: SearchDomain,
    H: Heuristic<D::Node>,
{
    search_with_sink(
        domain,
        start,
        goal,
        strategy,
        heuristic,
        &SearchPolicy::default(),
        &mut NullSink,
    )
}

/// Search from `start` to `goal`, streaming every event into `sink`.
///
/// `Exhausted` and `BudgetExceeded` are normal outcomes, not errors.
///
/// # Errors
///
/// Returns a configuration [`SearchError`] before any event is emitted if
/// the inputs are invalid (see [`SearchRun::new`]), or
/// [`SearchError::InvariantViolation`] if engine bookkeeping is corrupt.
pub fn search_with_sink<D, H>(
    domain: &D,
    start: D::Node,
    goal: D::Node,
    strategy: Strategy,
    heuristic: H,
    policy: &SearchPolicy,
    sink: &mut dyn InstrumentationSink<D::Node>,
) -> Result<Outcome<D::Node>, SearchError>
where
    D: SearchDomain,
    H: Heuristic<D::Node>,
{
    let mut run = SearchRun::new(domain, start, goal, strategy, heuristic, policy.clone())?;
    drive(&mut run, sink)
}

/// Traverse everything reachable from `start`, streaming events into `sink`.
///
/// The `Expanded` events give the visitation order (start excluded).
///
/// # Errors
///
/// Same as [`search_with_sink`], minus the goal and heuristic checks.
pub fn explore<D>(
    domain: &D,
    start: D::Node,
    strategy: Strategy,
    policy: &SearchPolicy,
    sink: &mut dyn InstrumentationSink<D::Node>,
) -> Result<SearchStats, SearchError>
where
    D: SearchDomain,
{
    let mut run = SearchRun::explore(domain, start, strategy, policy.clone())?;
    drive(&mut run, sink)?;
    Ok(run.stats())
}

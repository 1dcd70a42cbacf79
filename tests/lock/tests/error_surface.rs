//! Error taxonomy lock tests: configuration errors are raised before any
//! event, exhaustion and budget exhaustion are outcomes, not errors.

use lock_tests::scenarios::{enclosed_start, open_three_by_three};
use wayfinder_harness::{run_strategy, Cell, Grid, ManhattanHeuristic, RunError, WeightedGraph};
use wayfinder_search::{
    search_with_sink, Cost, Edge, Outcome, SearchDomain, SearchError, SearchPolicy, StepEvent,
    Strategy, ZeroHeuristic,
};

/// Directed two-edge chain with a caller-chosen cost on the second edge.
struct Chain {
    tail_cost: Cost,
}

impl SearchDomain for Chain {
    type Node = u8;

    #[allow(clippy::unnecessary_literal_bound)]
    fn domain_id(&self) -> &str {
        "chain"
    }

    fn contains(&self, node: &u8) -> bool {
        *node < 3
    }

    fn nodes(&self) -> Vec<u8> {
        vec![0, 1, 2]
    }

    fn neighbors(&self, node: &u8) -> Vec<Edge<u8>> {
        match node {
            0 => vec![Edge::new(1, 1)],
            1 => vec![Edge::new(2, self.tail_cost)],
            _ => Vec::new(),
        }
    }
}

fn collect<D: SearchDomain, H: wayfinder_search::Heuristic<D::Node>>(
    domain: &D,
    start: D::Node,
    goal: D::Node,
    strategy: Strategy,
    heuristic: H,
    policy: &SearchPolicy,
) -> (Result<Outcome<D::Node>, SearchError>, Vec<StepEvent<D::Node>>) {
    let mut events = Vec::new();
    let mut sink = |event: &StepEvent<D::Node>| events.push(event.clone());
    let result = search_with_sink(domain, start, goal, strategy, heuristic, policy, &mut sink);
    (result, events)
}

#[test]
fn negative_edge_is_rejected_for_every_strategy() {
    let chain = Chain { tail_cost: -4 };
    for strategy in Strategy::ALL {
        let (result, events) = collect(
            &chain,
            0,
            2,
            strategy,
            ZeroHeuristic,
            &SearchPolicy::default(),
        );
        let err = result.unwrap_err();
        assert!(
            matches!(err, SearchError::NegativeEdgeCost { cost: -4, .. }),
            "{strategy}: {err:?}"
        );
        assert!(err.is_configuration_error());
        assert!(events.is_empty(), "{strategy} emitted events before failing");
    }
}

#[test]
fn zero_cost_edges_are_allowed() {
    let chain = Chain { tail_cost: 0 };
    let (result, _) = collect(
        &chain,
        0,
        2,
        Strategy::Ucs,
        ZeroHeuristic,
        &SearchPolicy::default(),
    );
    assert_eq!(result.unwrap().cost(), Some(1));
}

#[test]
fn walled_endpoints_are_out_of_bounds() {
    let grid = Grid::parse("S#\n.G\n").unwrap();
    let wall = Cell::new(0, 1);

    let (result, events) = collect(
        &grid,
        wall,
        grid.goal(),
        Strategy::Bfs,
        ZeroHeuristic,
        &SearchPolicy::default(),
    );
    assert!(matches!(
        result,
        Err(SearchError::StartOutOfBounds { .. })
    ));
    assert!(events.is_empty());

    let (result, _) = collect(
        &grid,
        grid.start(),
        Cell::new(5, 5),
        Strategy::Bfs,
        ZeroHeuristic,
        &SearchPolicy::default(),
    );
    assert!(matches!(result, Err(SearchError::GoalOutOfBounds { .. })));
}

#[test]
fn inadmissible_heuristic_is_rejected_for_astar_only() {
    let grid = open_three_by_three();
    let doubled = |node: &Cell, goal: &Cell| -> Cost {
        2 * Cost::try_from(node.manhattan(*goal)).unwrap()
    };

    let (result, events) = collect(
        &grid,
        grid.start(),
        grid.goal(),
        Strategy::AStar,
        doubled,
        &SearchPolicy::default(),
    );
    let err = result.unwrap_err();
    assert!(
        matches!(err, SearchError::InconsistentHeuristic { .. }),
        "{err:?}"
    );
    assert!(events.is_empty());

    // UCS ignores the heuristic, so it is not validated.
    let (result, _) = collect(
        &grid,
        grid.start(),
        grid.goal(),
        Strategy::Ucs,
        doubled,
        &SearchPolicy::default(),
    );
    assert_eq!(result.unwrap().cost(), Some(4));
}

#[test]
fn heuristic_check_can_be_disabled() {
    let grid = open_three_by_three();
    let doubled = |node: &Cell, goal: &Cell| -> Cost {
        2 * Cost::try_from(node.manhattan(*goal)).unwrap()
    };
    let policy = SearchPolicy {
        check_heuristic: false,
        ..SearchPolicy::default()
    };
    let (result, _) = collect(
        &grid,
        grid.start(),
        grid.goal(),
        Strategy::AStar,
        doubled,
        &policy,
    );
    assert!(result.unwrap().is_found());
}

#[test]
fn exhaustion_is_an_outcome_not_an_error() {
    let grid = enclosed_start();
    let report = run_strategy(
        &grid,
        grid.start(),
        grid.goal(),
        Strategy::AStar,
        ManhattanHeuristic,
        &SearchPolicy::default(),
    )
    .unwrap();
    assert_eq!(report.outcome, Outcome::Exhausted);
}

#[test]
fn budget_ends_the_run_with_its_own_outcome() {
    let grid = Grid::open(10, 10).unwrap();
    let (result, events) = collect(
        &grid,
        grid.start(),
        grid.goal(),
        Strategy::Bfs,
        ZeroHeuristic,
        &SearchPolicy::with_max_expansions(5),
    );
    assert_eq!(result.unwrap(), Outcome::BudgetExceeded { expansions: 5 });
    // The start expansion counts against the budget but is not reported.
    assert_eq!(events.len(), 5);
    assert!(events.last().unwrap().is_terminal());
}

#[test]
fn runner_wraps_configuration_errors() {
    let grid = Grid::parse("S#\n.G\n").unwrap();
    let err = run_strategy(
        &grid,
        grid.start(),
        Cell::new(0, 1),
        Strategy::Dfs,
        ZeroHeuristic,
        &SearchPolicy::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        RunError::Search(SearchError::GoalOutOfBounds { .. })
    ));
}

#[test]
fn overflowing_path_cost_is_reported_not_truncated() {
    let chain = Chain {
        tail_cost: Cost::MAX,
    };
    for strategy in Strategy::ALL {
        let (result, events) = collect(
            &chain,
            0,
            2,
            strategy,
            ZeroHeuristic,
            &SearchPolicy::default(),
        );
        let err = result.unwrap_err();
        assert_eq!(err, SearchError::CostOverflow { node: "2".into() }, "{strategy}");
        assert!(!err.is_configuration_error());
        assert!(
            matches!(events.as_slice(), [StepEvent::Aborted { .. }]),
            "{strategy}: {events:?}"
        );
    }

    let mut graph = WeightedGraph::new();
    graph.add_edge(0, 1, Cost::MAX).unwrap();
    graph.add_edge(1, 2, Cost::MAX).unwrap();
    let err = run_strategy(
        &graph,
        0,
        2,
        Strategy::Ucs,
        ZeroHeuristic,
        &SearchPolicy::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        RunError::Search(SearchError::CostOverflow { .. })
    ));
}

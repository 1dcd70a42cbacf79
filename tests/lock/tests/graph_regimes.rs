//! Weighted-graph lock tests: UCS against an independent shortest-path
//! oracle, A* with the zero heuristic, and the two-node reference scenario.

use lock_tests::scenarios::{bellman_ford, two_node_weighted};
use proptest::prelude::*;
use proptest::strategy::Strategy as PropStrategy;
use wayfinder_harness::{generate_graph, GraphConfig, NodeId, WeightedGraph};
use wayfinder_search::{search, Cost, Outcome, Path, Strategy, ZeroHeuristic};

fn path_cost(graph: &WeightedGraph, path: &Path<NodeId>) -> Cost {
    path.nodes()
        .windows(2)
        .map(|pair| {
            graph
                .weight(pair[0], pair[1])
                .unwrap_or_else(|| panic!("path uses missing edge {pair:?}"))
        })
        .sum()
}

fn graph_config() -> impl PropStrategy<Value = GraphConfig> {
    (2usize..40, any::<u64>(), 1i64..20).prop_flat_map(|(node_count, seed, max_weight)| {
        let max_edges = node_count * (node_count - 1) / 2;
        (node_count - 1..=max_edges).prop_map(move |edge_count| GraphConfig {
            node_count,
            edge_count,
            min_weight: 1,
            max_weight,
            seed,
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn ucs_matches_bellman_ford(config in graph_config(), goal_pick in any::<prop::sample::Index>()) {
        let graph = generate_graph(&config).unwrap();
        let goal = NodeId::try_from(goal_pick.index(config.node_count)).unwrap();
        let oracle = bellman_ford(&graph, 0);

        let outcome = search(&graph, 0, goal, Strategy::Ucs, ZeroHeuristic).unwrap();
        let path = outcome.path().unwrap();
        prop_assert_eq!(outcome.cost(), oracle.get(&goal).copied());
        prop_assert_eq!(Some(path_cost(&graph, path)), outcome.cost());
        prop_assert_eq!(*path.start(), 0);
        prop_assert_eq!(*path.goal(), goal);
    }

    #[test]
    fn astar_with_zero_heuristic_equals_ucs(config in graph_config()) {
        let graph = generate_graph(&config).unwrap();
        let goal = NodeId::try_from(config.node_count - 1).unwrap();
        let ucs = search(&graph, 0, goal, Strategy::Ucs, ZeroHeuristic).unwrap();
        let astar = search(&graph, 0, goal, Strategy::AStar, ZeroHeuristic).unwrap();
        prop_assert_eq!(ucs, astar);
    }

    #[test]
    fn bfs_and_dfs_paths_are_valid_but_not_cheaper(config in graph_config()) {
        let graph = generate_graph(&config).unwrap();
        let goal = NodeId::try_from(config.node_count - 1).unwrap();
        let best = bellman_ford(&graph, 0)[&goal];
        for strategy in [Strategy::Bfs, Strategy::Dfs] {
            let outcome = search(&graph, 0, goal, strategy, ZeroHeuristic).unwrap();
            let cost = outcome.cost().unwrap();
            prop_assert_eq!(path_cost(&graph, outcome.path().unwrap()), cost);
            prop_assert!(cost >= best, "{} cost {} below optimum {}", strategy, cost, best);
        }
    }
}

// ---------------------------------------------------------------------------
// ACCEPTANCE: two nodes, one edge of weight 7
// ---------------------------------------------------------------------------

#[test]
fn two_node_graph_weight_seven() {
    let graph = two_node_weighted();
    for strategy in [Strategy::Ucs, Strategy::AStar] {
        let outcome = search(&graph, 0, 1, strategy, ZeroHeuristic).unwrap();
        assert_eq!(outcome.path().unwrap().nodes(), &[0, 1], "{strategy}");
        assert_eq!(outcome.cost(), Some(7), "{strategy}");
    }
}

#[test]
fn cheap_detour_beats_direct_edge() {
    let mut graph = WeightedGraph::new();
    graph.add_edge(0, 3, 10).unwrap();
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(1, 2, 1).unwrap();
    graph.add_edge(2, 3, 1).unwrap();

    let ucs = search(&graph, 0, 3, Strategy::Ucs, ZeroHeuristic).unwrap();
    assert_eq!(ucs.path().unwrap().nodes(), &[0, 1, 2, 3]);
    assert_eq!(ucs.cost(), Some(3));

    let bfs = search(&graph, 0, 3, Strategy::Bfs, ZeroHeuristic).unwrap();
    assert_eq!(bfs.path().unwrap().nodes(), &[0, 3]);
    assert_eq!(bfs.cost(), Some(10));
}

#[test]
fn disconnected_goal_is_exhausted() {
    let mut graph = two_node_weighted();
    graph.add_node(2);
    for strategy in Strategy::ALL {
        assert_eq!(
            search(&graph, 0, 2, strategy, ZeroHeuristic).unwrap(),
            Outcome::Exhausted,
            "{strategy}"
        );
    }
}

#[test]
fn start_equals_goal_is_zero_cost() {
    let graph = two_node_weighted();
    for strategy in Strategy::ALL {
        let outcome = search(&graph, 1, 1, strategy, ZeroHeuristic).unwrap();
        assert_eq!(outcome.path().unwrap().nodes(), &[1]);
        assert_eq!(outcome.cost(), Some(0));
    }
}

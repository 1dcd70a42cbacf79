//! Binary that runs every strategy on the fixture grid and graph and
//! prints deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: `<world>.<strategy>.<field>=<value>` lines on stdout. Timing is
//! deliberately not printed. Logs go to stderr, filtered by `RUST_LOG`
//! (default `warn`).

use lock_tests::scenarios::{fixture_graph_config, fixture_grid_config};
use tracing_subscriber::EnvFilter;
use wayfinder_harness::{compare_on_graph, compare_on_grid, RunError, RunReport};
use wayfinder_search::SearchPolicy;

fn print_reports<N>(world: &str, reports: &[RunReport<N>]) {
    for report in reports {
        let prefix = format!("{world}.{}", report.strategy);
        println!("{prefix}.outcome={}", report.outcome.kind());
        if let Some(cost) = report.outcome.cost() {
            println!("{prefix}.cost={cost}");
        }
        println!("{prefix}.path_len={}", report.path_len());
        println!("{prefix}.visited={}", report.visit_order.len());
        println!("{prefix}.expansions={}", report.stats.expansions);
        println!("{prefix}.stale_pops={}", report.stats.stale_pops);
        println!("{prefix}.transcript_digest={}", report.transcript_digest);
    }
}

fn main() -> Result<(), RunError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let policy = SearchPolicy::default();

    let grid_reports = compare_on_grid(&fixture_grid_config(), &policy)?;
    print_reports("grid", &grid_reports);

    let graph_reports = compare_on_graph(&fixture_graph_config(), &policy)?;
    print_reports("graph", &graph_reports);

    Ok(())
}

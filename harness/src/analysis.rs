//! Goal-less traversal helpers built on [`explore`].

use std::collections::BTreeMap;

use wayfinder_search::{explore, SearchDomain, SearchError, SearchPolicy, StepEvent, Strategy};

/// Every node reachable from `start`, in the order `strategy` visits it.
/// `start` comes first.
///
/// # Errors
///
/// Returns [`SearchError::StartOutOfBounds`] or a negative-edge error from
/// pre-flight.
pub fn traversal_order<D: SearchDomain>(
    domain: &D,
    start: D::Node,
    strategy: Strategy,
) -> Result<Vec<D::Node>, SearchError> {
    let mut order = vec![start.clone()];
    let mut sink = |event: &StepEvent<D::Node>| {
        if let Some(node) = event.expanded_node() {
            order.push(node.clone());
        }
    };
    explore(domain, start, strategy, &SearchPolicy::default(), &mut sink)?;
    Ok(order)
}

/// Hop distance from `start` to every reachable node.
///
/// # Errors
///
/// Same as [`traversal_order`].
pub fn bfs_levels<D: SearchDomain>(
    domain: &D,
    start: D::Node,
) -> Result<BTreeMap<D::Node, u32>, SearchError> {
    let mut levels = BTreeMap::from([(start.clone(), 0)]);
    let mut sink = |event: &StepEvent<D::Node>| {
        if let StepEvent::Expanded { node, depth, .. } = event {
            levels.insert(node.clone(), *depth);
        }
    };
    explore(domain, start, Strategy::Bfs, &SearchPolicy::default(), &mut sink)?;
    Ok(levels)
}

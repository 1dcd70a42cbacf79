//! Immutable start-to-goal paths and parent-link reconstruction.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::SearchError;
use crate::record::RecordArena;

/// Ordered node sequence from start to goal, inclusive. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N> {
    nodes: Vec<N>,
}

impl<N> Path<N> {
    /// Nodes from start to goal.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Number of nodes, start and goal included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// First node.
    #[must_use]
    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    /// Last node.
    #[must_use]
    pub fn goal(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.nodes.iter()
    }
}

impl<'a, N> IntoIterator for &'a Path<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Reconstruct the path from the start record to `goal`.
///
/// Walks parent links back to the record with no parent and reverses.
///
/// # Errors
///
/// Returns [`SearchError::InvariantViolation`] if `goal` has no record, a
/// link points outside the arena, or the chain revisits a record (cycle).
/// None of these can be caused by caller input.
pub fn reconstruct_path<N>(arena: &RecordArena<N>, goal: &N) -> Result<Path<N>, SearchError>
where
    N: Clone + Eq + Hash + Debug,
{
    let mut current = arena
        .id_of(goal)
        .ok_or_else(|| SearchError::InvariantViolation {
            detail: format!("goal {goal:?} has no search record"),
        })?;

    let mut nodes = Vec::new();
    loop {
        let record = arena
            .get(current)
            .ok_or_else(|| SearchError::InvariantViolation {
                detail: format!("parent link {} is outside the arena", current.index()),
            })?;
        nodes.push(record.node.clone());
        if nodes.len() > arena.len() {
            return Err(SearchError::InvariantViolation {
                detail: format!("parent chain from {goal:?} does not terminate"),
            });
        }
        match record.parent {
            Some(parent) => current = parent,
            None => break,
        }
    }

    nodes.reverse();
    Ok(Path { nodes })
}

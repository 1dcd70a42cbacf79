//! Per-node search bookkeeping.
//!
//! Records live in an arena addressed by [`RecordId`]; a `HashMap` maps
//! node identifiers to their slot. Parent links are arena ids, so a path
//! is stored once as a chain of links instead of once per frontier entry.

use std::collections::HashMap;
use std::hash::Hash;

use crate::domain::Cost;

/// Index of a record in its [`RecordArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

impl RecordId {
    /// Slot position in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Visitation status of a touched node.
///
/// Untouched nodes have no record at all, which is the `unvisited` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visitation {
    /// Discovered; at least one frontier entry may still be pending.
    Frontier,
    /// Popped and expanded; its cost is final for this run.
    Settled,
}

/// Bookkeeping for one touched node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord<N> {
    pub node: N,
    /// Best known cost-so-far. Only ever decreases.
    pub cost: Cost,
    /// `None` only for the start node.
    pub parent: Option<RecordId>,
    /// Edge count from start along the parent chain.
    pub depth: u32,
    pub status: Visitation,
}

/// Outcome of offering a candidate cost for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery {
    /// First time this node was touched.
    New(RecordId),
    /// Strictly cheaper than the recorded cost; the record was rewritten.
    Improved(RecordId),
    /// Not better than the recorded cost; nothing changed.
    Rejected(RecordId),
}

/// Arena of [`SearchRecord`]s, one per touched node.
#[derive(Debug, Clone)]
pub struct RecordArena<N> {
    records: Vec<SearchRecord<N>>,
    index: HashMap<N, RecordId>,
}

impl<N: Clone + Eq + Hash> RecordArena<N> {
    /// Empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create the start record (cost 0, no parent).
    pub fn insert_root(&mut self, node: N) -> RecordId {
        match self.discover(node, 0, None) {
            Discovery::New(id) | Discovery::Improved(id) | Discovery::Rejected(id) => id,
        }
    }

    /// Offer `cost` for `node` reached from `parent`.
    ///
    /// Creates the record on first discovery and overwrites it only when
    /// `cost` is strictly lower than the recorded cost. An improved record
    /// returns to [`Visitation::Frontier`].
    pub fn discover(&mut self, node: N, cost: Cost, parent: Option<RecordId>) -> Discovery {
        let depth = parent.map_or(0, |p| self.records[p.0].depth + 1);
        if let Some(&id) = self.index.get(&node) {
            let record = &mut self.records[id.0];
            if cost < record.cost {
                record.cost = cost;
                record.parent = parent;
                record.depth = depth;
                record.status = Visitation::Frontier;
                return Discovery::Improved(id);
            }
            return Discovery::Rejected(id);
        }

        let id = RecordId(self.records.len());
        self.index.insert(node.clone(), id);
        self.records.push(SearchRecord {
            node,
            cost,
            parent,
            depth,
            status: Visitation::Frontier,
        });
        Discovery::New(id)
    }

    /// Mark a record expanded.
    pub fn settle(&mut self, id: RecordId) {
        self.records[id.0].status = Visitation::Settled;
    }

    /// Slot holding `node`'s record, if it was touched.
    #[must_use]
    pub fn id_of(&self, node: &N) -> Option<RecordId> {
        self.index.get(node).copied()
    }

    /// Record at `id`.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&SearchRecord<N>> {
        self.records.get(id.0)
    }

    /// Record for `node`, if it was touched.
    #[must_use]
    pub fn lookup(&self, node: &N) -> Option<&SearchRecord<N>> {
        self.id_of(node).and_then(|id| self.get(id))
    }

    /// Whether `node` has been touched.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Number of touched nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no node has been touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchRecord<N>> {
        self.records.iter()
    }
}

impl<N: Clone + Eq + Hash> Default for RecordArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

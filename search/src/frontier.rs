//! Frontier ordering policies: FIFO, LIFO, and stable min-key.
//!
//! Every frontier stamps entries with a monotonic insertion sequence on
//! push. The min-key frontier orders by `(priority, sequence)`, so equal
//! priorities pop oldest-first and traversal order is reproducible.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::domain::Cost;
use crate::record::RecordId;

/// A pending node awaiting expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry<N> {
    /// Ordering key for min-key frontiers (`g` for UCS, `g + h` for A*).
    /// Ignored by FIFO/LIFO frontiers.
    pub priority: Cost,
    /// Cost-so-far at the time of push.
    pub cost: Cost,
    pub node: N,
    /// Record of the node this entry was discovered from. A live entry
    /// agrees with its node's record.
    pub parent: Option<RecordId>,
    seq: u64,
}

impl<N> FrontierEntry<N> {
    /// Unstamped entry; the frontier assigns its sequence on push.
    #[must_use]
    pub fn new(priority: Cost, cost: Cost, node: N, parent: Option<RecordId>) -> Self {
        Self {
            priority,
            cost,
            node,
            parent,
            seq: 0,
        }
    }

    /// Insertion sequence assigned by the frontier on push.
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Min-key ordering for this entry.
    #[must_use]
    pub fn key(&self) -> FrontierKey {
        FrontierKey {
            priority: self.priority,
            seq: self.seq,
        }
    }
}

/// The min-key ordering: lower priority first, then older insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub priority: Cost,
    pub seq: u64,
}

/// Ordering policy over pending entries.
pub trait Frontier<N> {
    /// Insert an entry, stamping its insertion sequence.
    fn push(&mut self, entry: FrontierEntry<N>);

    /// Remove the next entry according to this frontier's policy.
    fn pop(&mut self) -> Option<FrontierEntry<N>>;

    /// Current frontier size.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    fn high_water(&self) -> usize;
}

/// Shared push bookkeeping: sequence stamping and high-water tracking.
#[derive(Debug, Default)]
struct Stamp {
    next_seq: u64,
    high_water: usize,
}

impl Stamp {
    fn stamp<N>(&mut self, entry: &mut FrontierEntry<N>) {
        entry.seq = self.next_seq;
        self.next_seq += 1;
    }

    fn observe(&mut self, len: usize) {
        self.high_water = self.high_water.max(len);
    }
}

/// BFS frontier: pops the oldest entry.
#[derive(Debug)]
pub struct QueueFrontier<N> {
    queue: VecDeque<FrontierEntry<N>>,
    stamp: Stamp,
}

impl<N> QueueFrontier<N> {
    /// Empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            stamp: Stamp::default(),
        }
    }
}

impl<N> Default for QueueFrontier<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Frontier<N> for QueueFrontier<N> {
    fn push(&mut self, mut entry: FrontierEntry<N>) {
        self.stamp.stamp(&mut entry);
        self.queue.push_back(entry);
        self.stamp.observe(self.queue.len());
    }

    fn pop(&mut self) -> Option<FrontierEntry<N>> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> usize {
        self.stamp.high_water
    }
}

/// DFS frontier: pops the most recently inserted entry.
#[derive(Debug)]
pub struct StackFrontier<N> {
    stack: Vec<FrontierEntry<N>>,
    stamp: Stamp,
}

impl<N> StackFrontier<N> {
    /// Empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            stamp: Stamp::default(),
        }
    }
}

impl<N> Default for StackFrontier<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Frontier<N> for StackFrontier<N> {
    fn push(&mut self, mut entry: FrontierEntry<N>) {
        self.stamp.stamp(&mut entry);
        self.stack.push(entry);
        self.stamp.observe(self.stack.len());
    }

    fn pop(&mut self) -> Option<FrontierEntry<N>> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> usize {
        self.stamp.high_water
    }
}

/// Heap slot ordered only by [`FrontierKey`].
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop
/// the lowest `(priority, seq)` first. Node identity never participates
/// in the ordering.
#[derive(Debug)]
struct HeapSlot<N> {
    key: Reverse<FrontierKey>,
    entry: FrontierEntry<N>,
}

impl<N> PartialEq for HeapSlot<N> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<N> Eq for HeapSlot<N> {}

impl<N> PartialOrd for HeapSlot<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for HeapSlot<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// UCS / A* frontier: pops the minimum priority, oldest first on ties.
#[derive(Debug)]
pub struct MinKeyFrontier<N> {
    heap: BinaryHeap<HeapSlot<N>>,
    stamp: Stamp,
}

impl<N> MinKeyFrontier<N> {
    /// Empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            stamp: Stamp::default(),
        }
    }
}

impl<N> Default for MinKeyFrontier<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Frontier<N> for MinKeyFrontier<N> {
    fn push(&mut self, mut entry: FrontierEntry<N>) {
        self.stamp.stamp(&mut entry);
        self.heap.push(HeapSlot {
            key: Reverse(entry.key()),
            entry,
        });
        self.stamp.observe(self.heap.len());
    }

    fn pop(&mut self) -> Option<FrontierEntry<N>> {
        self.heap.pop().map(|slot| slot.entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn high_water(&self) -> usize {
        self.stamp.high_water
    }
}

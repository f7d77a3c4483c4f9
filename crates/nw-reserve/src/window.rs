//! `ReservationWindow`: ordered destination claims with prefix eviction.
//!
//! # Semantics
//!
//! The window is a sequence of `NodeId`s in claim order.  Duplicates are
//! allowed: an agent that cannot move re-claims the node it stands on
//! whether or not that node is already claimed, and both entries live until
//! evicted.  Only a contiguous prefix is ever removed.
//!
//! The simulation snapshots `len()` at the start of each movement cycle and
//! evicts exactly that many entries once every agent has decided.  Claims
//! made during the cycle therefore survive into the next one, and no claim
//! disappears while agents are still deciding.
//!
//! # Layout
//!
//! Claims are kept in a `VecDeque` (O(1) append, O(k) prefix removal).  A
//! side map counts how many times each node currently occurs so
//! `is_reserved` is O(1) instead of a linear scan.  The map never holds a
//! zero count.

use std::collections::VecDeque;

use nw_core::NodeId;

#[cfg(not(feature = "fx-hash"))]
type CountMap = std::collections::HashMap<NodeId, u32>;
#[cfg(feature = "fx-hash")]
type CountMap = rustc_hash::FxHashMap<NodeId, u32>;

/// Shared, ordered list of claimed destination nodes.
///
/// Not thread-safe by design of the tick loop: agents are updated strictly
/// one after another, and each sees the claims of every agent before it.
#[derive(Debug, Clone, Default)]
pub struct ReservationWindow {
    order:  VecDeque<NodeId>,
    counts: CountMap,
}

impl ReservationWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            order:  VecDeque::with_capacity(n),
            counts: CountMap::default(),
        }
    }

    /// `true` iff `node` occurs anywhere in the window.
    #[inline]
    pub fn is_reserved(&self, node: NodeId) -> bool {
        self.counts.contains_key(&node)
    }

    /// How many entries currently claim `node`.
    #[inline]
    pub fn count_of(&self, node: NodeId) -> u32 {
        self.counts.get(&node).copied().unwrap_or(0)
    }

    /// Append a claim on `node`.  Never deduplicates; callers check
    /// [`is_reserved`](Self::is_reserved) first when they care.
    pub fn reserve(&mut self, node: NodeId) {
        self.order.push_back(node);
        *self.counts.entry(node).or_insert(0) += 1;
    }

    /// Remove the oldest `count` claims.  Removes everything if `count`
    /// exceeds the current length.
    pub fn evict_prefix(&mut self, count: usize) {
        let count = count.min(self.order.len());
        for node in self.order.drain(..count) {
            if let Some(c) = self.counts.get_mut(&node) {
                *c -= 1;
                if *c == 0 {
                    self.counts.remove(&node);
                }
            }
        }
    }

    /// Total number of claims, duplicates included.
    #[inline]
    pub fn size(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct nodes currently claimed.
    #[inline]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Claims in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }
}

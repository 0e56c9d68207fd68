//! Min-priority frontier with FIFO tie-breaking.
//!
//! Entries are kept in a min-heap keyed by `(rank, seq)`. Lower ranks pop
//! first; equal ranks pop in insertion order, so successors pushed in
//! canonical order keep that order among equal keys.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T> {
    item: T,
    rank: i64,
    /// Monotonically increasing insertion counter.
    seq: u64,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; wrapped in Reverse for the BinaryHeap.
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A priority frontier. Items with lower rank come out first; among equal
/// ranks, items pushed earlier come out first.
pub(crate) struct PriorityFrontier<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    seq: u64,
}

impl<T> PriorityFrontier<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, item: T, rank: i64) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry { item, rank, seq }));
    }

    pub(crate) fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(e)| e.item)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_rank_first() {
        let mut q = PriorityFrontier::new();
        q.push("a", 3);
        q.push("b", 1);
        q.push("c", 2);
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Some("b"));
        assert_eq!(q.pop(), Some("c"));
        assert_eq!(q.pop(), Some("a"));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn fifo_within_rank() {
        let mut q = PriorityFrontier::new();
        q.push("up", 4);
        q.push("down", 4);
        q.push("left", 2);
        q.push("right", 4);
        assert_eq!(q.pop(), Some("left"));
        assert_eq!(q.pop(), Some("up"));
        assert_eq!(q.pop(), Some("down"));
        assert_eq!(q.pop(), Some("right"));
    }
}

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Heap entry ordered by priority alone, so vertex ids never need `Ord`
#[derive(Debug, Clone)]
struct QueueEntry<V, P> {
    priority: P,
    vertex: V,
}

impl<V, P: Ord> PartialEq for QueueEntry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<V, P: Ord> Eq for QueueEntry<V, P> {}

impl<V, P: Ord> PartialOrd for QueueEntry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Ord> Ord for QueueEntry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// A binary min-heap of `(priority, vertex)` pairs.
///
/// There is no decrease-key: a vertex may be pushed several times and callers
/// discard the stale copies when they pop them (lazy deletion).
#[derive(Debug)]
pub struct MinPriorityQueue<V, P>
where
    V: Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<QueueEntry<V, P>>>,
}

impl<V, P> MinPriorityQueue<V, P>
where
    V: Clone + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty priority queue with preallocated room
    pub fn with_capacity(capacity: usize) -> Self {
        MinPriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given priority
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse(QueueEntry { priority, vertex }));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse(QueueEntry { priority, vertex })| (vertex, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.vertex, entry.priority))
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for MinPriorityQueue<V, P>
where
    V: Clone + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

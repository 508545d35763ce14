//! Counting discipline shared by both engines.
//!
//! The two counters are internally consistent per engine but model different
//! costs: a naive selection round charges the whole scan width, while the heap
//! engine charges successful relaxations only and never counts the comparisons
//! made inside the heap. Compare engines by trend, not op-for-op.

use serde::Serialize;

/// Operation and comparison counters of one shortest-path run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counters {
    /// Selections (naive), pops (heap) and successful relaxations (both)
    pub operations: u64,

    /// Scan width per selection (naive) plus successful relaxations (both)
    pub comparisons: u64,
}

impl Counters {
    /// Fresh zeroed counters
    pub fn new() -> Self {
        Counters::default()
    }

    /// A linear-scan selection over `scanned` unvisited vertices
    pub fn record_scan(&mut self, scanned: usize) {
        self.operations += 1;
        self.comparisons += scanned as u64;
    }

    /// A priority queue pop, stale or not
    pub fn record_pop(&mut self) {
        self.operations += 1;
    }

    /// A relaxation that improved a tentative distance
    pub fn record_relaxation(&mut self) {
        self.operations += 1;
        self.comparisons += 1;
    }

    /// Aggregate cost used by the benchmark sweep
    pub fn total(&self) -> u64 {
        self.operations + self.comparisons
    }
}

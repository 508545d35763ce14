//! Dijkstra Compare - naive and binary-heap single-source shortest paths
//!
//! This library computes single-source shortest paths over weighted undirected
//! graphs with two strategies: a linear-scan selection (O(V²)) and a lazy-deletion
//! binary heap (O((V+E) log V)). Every run also reports an operation counter and a
//! comparison counter so the two strategies can be compared empirically.
//!
//! Edge weights must be non-negative; shortest-path optimality is only guaranteed
//! under that precondition.

pub mod algorithm;
pub mod benchmark;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::HeapDijkstra, naive::NaiveDijkstra, Counters, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Start vertex not found in graph")]
    VertexNotFound,

    #[error("Invalid edge weight: {0} (weights must be non-negative numbers)")]
    InvalidEdgeWeight(f64),

    #[error("Invalid graph parameters: {0}")]
    InvalidGraphParameters(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

pub mod traits;
pub mod instrumentation;
pub mod naive;
pub mod dijkstra;

pub use instrumentation::Counters;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};

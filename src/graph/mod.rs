pub mod traits;
pub mod undirected;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use undirected::UndirectedGraph;

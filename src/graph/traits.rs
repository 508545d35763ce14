use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::Result;

/// Trait representing a weighted undirected graph, as seen by the shortest path engines
pub trait Graph<V, W>: Debug
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex id, in no particular order
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the neighbors of a vertex with the connecting edge weight.
    /// Yields nothing for an absent vertex.
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, a: &V, b: &V) -> bool {
        self.get_edge_weight(a, b).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, a: &V, b: &V) -> Option<W>;

    /// Number of neighbors of a vertex (0 if absent)
    fn degree(&self, vertex: &V) -> usize {
        self.neighbors(vertex).count()
    }
}

/// Trait for mutable graph operations.
///
/// Removals of absent elements are no-ops and report `false`; they never fail.
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Ensures the vertex exists. Returns true if it was newly added.
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Removes a vertex and every edge touching it
    fn remove_vertex(&mut self, vertex: &V) -> bool;

    /// Adds (or overwrites) the undirected edge `a - b`, creating missing endpoints
    fn add_edge(&mut self, a: V, b: V, weight: W) -> Result<()>;

    /// Removes the undirected edge `a - b`
    fn remove_edge(&mut self, a: &V, b: &V) -> bool;
}

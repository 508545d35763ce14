use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::algorithm::instrumentation::Counters;
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Distance from the source to every vertex, infinite when unreachable
    pub distances: HashMap<V, W>,

    /// Predecessor of every vertex in the shortest path tree
    pub predecessors: HashMap<V, Option<V>>,

    /// Source vertex ID
    pub source: V,

    /// Instrumentation counters for this run
    pub counters: Counters,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Distance to `vertex`, `None` if the vertex was not in the graph
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Predecessor of `vertex`, `None` for the source, unreached or unknown vertices
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(|pred| pred.as_ref())
    }

    /// True if `vertex` has a finite distance
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).map_or(false, |d| d.is_finite())
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    pub fn operations(&self) -> u64 {
        self.counters.operations
    }

    pub fn comparisons(&self) -> u64 {
        self.counters.comparisons
    }

    /// Walks the predecessor chain back from `target` and returns the path
    /// source -> target, or `None` if the target is unreachable
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target.clone();
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != self.source {
            if !visited.insert(current.clone()) {
                log::warn!("Cycle detected in path reconstruction at vertex {:?}", current);
                return None;
            }

            match self.predecessor(&current) {
                Some(pred) => {
                    path.push(current);
                    current = pred.clone();
                }
                None => {
                    // A reachable non-source vertex always has a predecessor
                    log::warn!("Broken predecessor chain at vertex {:?}", current);
                    return None;
                }
            }
        }

        path.push(self.source.clone());
        path.reverse();

        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Option<Vec<V>> {
        result.path_to(target)
    }
}

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::graph::Graph;
use crate::algorithm::{Counters, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinPriorityQueue;
use crate::{Error, Result};

/// Dijkstra's algorithm driven by a binary min-heap with lazy deletion
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapDijkstra;

impl HeapDijkstra {
    /// Creates a new heap-based Dijkstra instance
    pub fn new() -> Self {
        HeapDijkstra
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for HeapDijkstra
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy + Ord,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra (binary heap)"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::VertexNotFound);
        }

        let n = graph.vertex_count();
        log::debug!("heap Dijkstra: {} vertices, source {:?}", n, source);

        let mut distances: HashMap<V, W> = graph
            .vertices()
            .map(|v| (v.clone(), W::infinity()))
            .collect();
        let mut predecessors: HashMap<V, Option<V>> =
            graph.vertices().map(|v| (v.clone(), None)).collect();
        distances.insert(source.clone(), W::zero());

        let mut queue = MinPriorityQueue::with_capacity(n);
        queue.push(source.clone(), W::zero());
        let mut finalized: HashSet<V> = HashSet::with_capacity(n);
        let mut counters = Counters::new();

        while let Some((u, dist_u)) = queue.pop() {
            counters.record_pop();

            // Stale entry for a vertex that is already final
            if !finalized.insert(u.clone()) {
                continue;
            }

            for (v, weight) in graph.neighbors(&u) {
                if finalized.contains(v) {
                    continue;
                }

                let candidate = dist_u + weight;
                let current = distances.get(v).copied().unwrap_or_else(W::infinity);

                if candidate < current {
                    log::trace!("relax {:?} -> {:?}: {:?}", u, v, candidate);
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    queue.push(v.clone(), candidate);
                    counters.record_relaxation();
                }
            }
        }

        log::debug!(
            "heap Dijkstra finished: {} finalized, {} operations, {} comparisons",
            finalized.len(),
            counters.operations,
            counters.comparisons
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
            counters,
        })
    }
}

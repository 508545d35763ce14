use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::graph::Graph;
use crate::algorithm::{Counters, ShortestPathAlgorithm, ShortestPathResult};
use crate::{Error, Result};

/// Dijkstra's algorithm with a linear scan over the unvisited set to pick the
/// next vertex, O(V²) overall.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveDijkstra;

impl NaiveDijkstra {
    /// Creates a new naive Dijkstra instance
    pub fn new() -> Self {
        NaiveDijkstra
    }
}

/// Unvisited vertex with the smallest distance. The scan follows the graph's own
/// vertex order, so on ties the first one scanned wins and repeated runs on an
/// unmodified graph pick the same vertex.
fn closest_unvisited<'a, V, W>(
    vertices: impl Iterator<Item = &'a V>,
    unvisited: &HashSet<V>,
    distances: &HashMap<V, W>,
) -> Option<(V, W)>
where
    V: Eq + Hash + Clone + Debug + 'a,
    W: Float + Debug + Copy,
{
    let mut best: Option<(&V, W)> = None;

    for vertex in vertices.filter(|v| unvisited.contains(*v)) {
        let dist = distances.get(vertex).copied().unwrap_or_else(W::infinity);
        match best {
            Some((_, best_dist)) if !(dist < best_dist) => {}
            _ => best = Some((vertex, dist)),
        }
    }

    best.map(|(vertex, dist)| (vertex.clone(), dist))
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for NaiveDijkstra
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra (naive scan)"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::VertexNotFound);
        }

        log::debug!("naive Dijkstra: {} vertices, source {:?}", graph.vertex_count(), source);

        let mut distances: HashMap<V, W> = graph
            .vertices()
            .map(|v| (v.clone(), W::infinity()))
            .collect();
        let mut predecessors: HashMap<V, Option<V>> =
            graph.vertices().map(|v| (v.clone(), None)).collect();
        distances.insert(source.clone(), W::zero());

        let mut unvisited: HashSet<V> = graph.vertices().cloned().collect();
        let mut counters = Counters::new();

        while let Some((current, dist_current)) =
            closest_unvisited(graph.vertices(), &unvisited, &distances)
        {
            counters.record_scan(unvisited.len());

            // Everything left is unreachable
            if dist_current.is_infinite() {
                log::trace!("{} vertices unreachable", unvisited.len());
                break;
            }

            unvisited.remove(&current);

            for (v, weight) in graph.neighbors(&current) {
                if !unvisited.contains(v) {
                    continue;
                }

                let candidate = dist_current + weight;
                let known = distances.get(v).copied().unwrap_or_else(W::infinity);

                if candidate < known {
                    log::trace!("relax {:?} -> {:?}: {:?}", current, v, candidate);
                    distances.insert(v.clone(), candidate);
                    predecessors.insert(v.clone(), Some(current.clone()));
                    counters.record_relaxation();
                }
            }
        }

        log::debug!(
            "naive Dijkstra finished: {} operations, {} comparisons",
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

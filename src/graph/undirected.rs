use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::Float;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// An undirected graph stored as symmetric adjacency maps.
///
/// For every entry `adjacency[a][b] = w` the mirror entry `adjacency[b][a] = w`
/// exists as well. All mutation goes through this type; engines only ever see
/// it through a shared borrow.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// vertex -> (neighbor -> weight)
    adjacency: HashMap<V, HashMap<V, W>>,
}

impl<V, W> UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Creates an empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        UndirectedGraph {
            adjacency: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from `(a, b, weight)` triples
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = UndirectedGraph::new();
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Every undirected edge exactly once, as `(a, b, weight)`
    pub fn edges(&self) -> Vec<(V, V, W)> {
        let mut edges = Vec::new();
        let mut emitted: HashSet<(&V, &V)> = HashSet::new();

        for (a, neighbors) in &self.adjacency {
            for (b, weight) in neighbors {
                // Skip the mirror of an edge we already produced
                if emitted.contains(&(b, a)) {
                    continue;
                }
                edges.push((a.clone(), b.clone(), *weight));
                emitted.insert((a, b));
            }
        }

        edges
    }

    /// The neighbor -> weight map of a vertex, empty if the vertex is absent
    pub fn adjacency_of(&self, vertex: &V) -> HashMap<V, W> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }

    /// Checks that no stored weight is negative or NaN
    pub fn validate_non_negative(&self) -> bool {
        self.adjacency
            .values()
            .flat_map(|neighbors| neighbors.values())
            .all(|weight| is_valid_weight(*weight))
    }
}

impl<V, W> Default for UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

fn is_valid_weight<W: Float>(weight: W) -> bool {
    !weight.is_nan() && weight >= W::zero()
}

impl<V, W> Graph<V, W> for UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        let entries: usize = self.adjacency.values().map(|neighbors| neighbors.len()).sum();
        // A self-loop is stored once, every other edge twice
        let loops = self
            .adjacency
            .iter()
            .filter(|(vertex, neighbors)| neighbors.contains_key(*vertex))
            .count();
        (entries + loops) / 2
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(neighbors) = self.adjacency.get(vertex) {
            Box::new(neighbors.iter().map(|(neighbor, weight)| (neighbor, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn get_edge_weight(&self, a: &V, b: &V) -> Option<W> {
        self.adjacency
            .get(a)
            .and_then(|neighbors| neighbors.get(b))
            .copied()
    }

    fn degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map_or(0, |neighbors| neighbors.len())
    }
}

impl<V, W> MutableGraph<V, W> for UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, HashMap::new());
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(neighbors) = self.adjacency.remove(vertex) else {
            return false;
        };

        for neighbor in neighbors.keys() {
            if let Some(back) = self.adjacency.get_mut(neighbor) {
                back.remove(vertex);
            }
        }

        true
    }

    fn add_edge(&mut self, a: V, b: V, weight: W) -> Result<()> {
        if !is_valid_weight(weight) {
            return Err(Error::InvalidEdgeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }

        // Last write wins on an existing edge
        self.adjacency
            .entry(a.clone())
            .or_default()
            .insert(b.clone(), weight);
        self.adjacency.entry(b).or_default().insert(a, weight);

        Ok(())
    }

    fn remove_edge(&mut self, a: &V, b: &V) -> bool {
        let removed = match self.adjacency.get_mut(a) {
            Some(neighbors) => neighbors.remove(b).is_some(),
            None => false,
        };

        if removed {
            if let Some(neighbors) = self.adjacency.get_mut(b) {
                neighbors.remove(a);
            }
        }

        removed
    }
}

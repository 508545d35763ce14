use crate::graph::{Graph, MutableGraph, UndirectedGraph};
use crate::{Error, Result};
use ordered_float::OrderedFloat;
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of edges a graph on `n` vertices gets for the given density, never
/// fewer than the `n - 1` a spanning tree needs
pub fn edge_count_for_density(n: usize, density: f64) -> usize {
    let max_edges = n * n.saturating_sub(1) / 2;
    let edges = (density * max_edges as f64) as usize;
    edges.max(n.saturating_sub(1))
}

/// Generates a connected random graph on vertices `0..n` with exactly `m` edges.
///
/// A random spanning tree is built first (each new vertex is attached to a
/// random already connected one), then random extra edges are added until `m`
/// is reached. Weights are integers drawn uniformly from `min_weight..=max_weight`.
pub fn generate_random_connected<R: Rng + ?Sized>(
    n: usize,
    m: usize,
    min_weight: u32,
    max_weight: u32,
    rng: &mut R,
) -> Result<UndirectedGraph<usize, OrderedFloat<f64>>> {
    if n == 0 {
        return Err(Error::InvalidGraphParameters(
            "a graph needs at least one vertex".to_string(),
        ));
    }
    if m < n - 1 {
        return Err(Error::InvalidGraphParameters(format!(
            "a connected graph on {} vertices needs at least {} edges, got {}",
            n,
            n - 1,
            m
        )));
    }
    let max_edges = n * (n - 1) / 2;
    if m > max_edges {
        return Err(Error::InvalidGraphParameters(format!(
            "too many edges requested: {} (maximum possible: {})",
            m, max_edges
        )));
    }
    if min_weight > max_weight {
        return Err(Error::InvalidGraphParameters(format!(
            "empty weight range {}..={}",
            min_weight, max_weight
        )));
    }

    let mut graph = UndirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }

    let mut connected = vec![0];
    let mut unconnected: Vec<usize> = (1..n).collect();

    // Random spanning tree
    while !unconnected.is_empty() {
        let idx = rng.gen_range(0..unconnected.len());
        let new_vertex = unconnected.swap_remove(idx);
        let anchor = *connected
            .choose(rng)
            .ok_or_else(|| Error::InvalidGraphParameters("no connected vertex".to_string()))?;
        let weight = random_weight(rng, min_weight, max_weight);
        graph.add_edge(anchor, new_vertex, weight)?;
        connected.push(new_vertex);
    }

    // Extra edges between distinct, not yet adjacent vertices
    let mut added = n - 1;
    while added < m {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a == b || graph.has_edge(&a, &b) {
            continue;
        }
        let weight = random_weight(rng, min_weight, max_weight);
        graph.add_edge(a, b, weight)?;
        added += 1;
    }

    log::debug!("generated connected graph: {} vertices, {} edges", n, m);

    Ok(graph)
}

fn random_weight<R: Rng + ?Sized>(rng: &mut R, min_weight: u32, max_weight: u32) -> OrderedFloat<f64> {
    OrderedFloat(rng.gen_range(min_weight..=max_weight) as f64)
}

/// Generates a 4-connected `width` x `height` grid; vertex `(x, y)` has id `y * width + x`
pub fn generate_grid(
    width: usize,
    height: usize,
    weight: f64,
) -> Result<UndirectedGraph<usize, OrderedFloat<f64>>> {
    let mut graph = UndirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            graph.add_vertex(vertex);

            if x + 1 < width {
                graph.add_edge(vertex, vertex + 1, OrderedFloat(weight))?;
            }
            if y + 1 < height {
                graph.add_edge(vertex, vertex + width, OrderedFloat(weight))?;
            }
        }
    }

    Ok(graph)
}

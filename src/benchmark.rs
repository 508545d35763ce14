//! Benchmark sweep comparing the naive and heap engines on random connected graphs.
//!
//! The sweep only talks to the core through `UndirectedGraph` and the
//! `ShortestPathAlgorithm` trait.

use std::fmt::Write as _;
use std::time::Instant;

use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::algorithm::{Counters, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::generators::{edge_count_for_density, generate_random_connected};
use crate::graph::{Graph, UndirectedGraph};
use crate::{HeapDijkstra, NaiveDijkstra, Result};

type SweepGraph = UndirectedGraph<usize, OrderedFloat<f64>>;

/// Parameters of a benchmark sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkConfig {
    /// Graph sizes (vertex counts) to measure
    pub sizes: Vec<usize>,
    /// Fraction of all possible edges present in each graph
    pub density: f64,
    /// Smallest integer edge weight
    pub min_weight: u32,
    /// Largest integer edge weight
    pub max_weight: u32,
    /// Start vertex of every query
    pub source: usize,
    /// RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            sizes: vec![10, 50, 100, 200, 300, 400, 500],
            density: 0.3,
            min_weight: 1,
            max_weight: 10,
            source: 0,
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_weight_range(mut self, min_weight: u32, max_weight: u32) -> Self {
        self.min_weight = min_weight;
        self.max_weight = max_weight;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Time and counters of one engine on one graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineMeasurement {
    pub elapsed_ms: f64,
    pub operations: u64,
    pub comparisons: u64,
    /// operations + comparisons
    pub aggregate_cost: u64,
}

impl EngineMeasurement {
    fn new(elapsed_ms: f64, counters: Counters) -> Self {
        EngineMeasurement {
            elapsed_ms,
            operations: counters.operations,
            comparisons: counters.comparisons,
            aggregate_cost: counters.total(),
        }
    }
}

/// Both engines measured on the same graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeComparison {
    pub vertices: usize,
    pub edges: usize,
    pub naive: EngineMeasurement,
    pub heap: EngineMeasurement,
    /// Whether both engines produced the same distance map
    pub distances_agree: bool,
}

/// Outcome of a full sweep
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub generated_at: DateTime<Utc>,
    pub config: BenchmarkConfig,
    pub rounds: Vec<SizeComparison>,
}

fn timed_run<A>(
    algorithm: &A,
    graph: &SweepGraph,
    source: usize,
) -> Result<(ShortestPathResult<usize, OrderedFloat<f64>>, f64)>
where
    A: ShortestPathAlgorithm<usize, OrderedFloat<f64>, SweepGraph>,
{
    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, &source)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    Ok((result, elapsed_ms))
}

/// Measures both engines on one already built graph
pub fn compare_on_graph(graph: &SweepGraph, source: usize) -> Result<SizeComparison> {
    let (naive_result, naive_ms) = timed_run(&NaiveDijkstra::new(), graph, source)?;
    let (heap_result, heap_ms) = timed_run(&HeapDijkstra::new(), graph, source)?;

    let distances_agree = naive_result.distances == heap_result.distances;
    if !distances_agree {
        log::warn!(
            "engines disagree on distances for a graph with {} vertices",
            graph.vertex_count()
        );
    }

    Ok(SizeComparison {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        naive: EngineMeasurement::new(naive_ms, naive_result.counters),
        heap: EngineMeasurement::new(heap_ms, heap_result.counters),
        distances_agree,
    })
}

/// Runs the sweep: one random connected graph per configured size
pub fn compare_performances(config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut rounds = Vec::with_capacity(config.sizes.len());

    for &n in &config.sizes {
        let m = edge_count_for_density(n, config.density);
        let graph = generate_random_connected(n, m, config.min_weight, config.max_weight, &mut rng)?;

        let round = compare_on_graph(&graph, config.source)?;
        log::info!(
            "n={} m={}: naive {:.3} ms / cost {}, heap {:.3} ms / cost {}",
            round.vertices,
            round.edges,
            round.naive.elapsed_ms,
            round.naive.aggregate_cost,
            round.heap.elapsed_ms,
            round.heap.aggregate_cost
        );
        rounds.push(round);
    }

    Ok(BenchmarkReport {
        generated_at: Utc::now(),
        config: config.clone(),
        rounds,
    })
}

impl BenchmarkReport {
    /// Fixed-width summary table, one row per graph size
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<10} | {:<8} | {:<12} | {:<12} | {:<12} | {:<12}",
            "Vertices", "Edges", "Naive (ms)", "Heap (ms)", "Naive cost", "Heap cost"
        );
        let _ = writeln!(out, "{}", "-".repeat(81));

        for round in &self.rounds {
            let _ = writeln!(
                out,
                "{:<10} | {:<8} | {:<12.3} | {:<12.3} | {:<12} | {:<12}",
                round.vertices,
                round.edges,
                round.naive.elapsed_ms,
                round.heap.elapsed_ms,
                round.naive.aggregate_cost,
                round.heap.aggregate_cost
            );
        }

        out
    }
}

use dijkstra_compare::graph::{Graph, MutableGraph, UndirectedGraph};
use dijkstra_compare::Error;
use ordered_float::OrderedFloat;
use std::collections::HashSet;

type TestGraph = UndirectedGraph<usize, OrderedFloat<f64>>;

fn sample_graph() -> TestGraph {
    UndirectedGraph::from_edges(vec![
        (0, 1, OrderedFloat(4.0)),
        (0, 2, OrderedFloat(1.0)),
        (1, 2, OrderedFloat(2.0)),
        (1, 3, OrderedFloat(1.0)),
        (2, 3, OrderedFloat(5.0)),
    ])
    .unwrap()
}

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph: TestGraph = UndirectedGraph::new();
    assert!(graph.add_vertex(7));
    assert!(!graph.add_vertex(7));
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.degree(&7), 0);
}

#[test]
fn test_add_edge_is_symmetric_and_creates_endpoints() {
    let mut graph: TestGraph = UndirectedGraph::new();
    graph.add_edge(1, 2, OrderedFloat(3.5)).unwrap();

    assert!(graph.has_vertex(&1));
    assert!(graph.has_vertex(&2));
    assert_eq!(graph.get_edge_weight(&1, &2), Some(OrderedFloat(3.5)));
    assert_eq!(graph.get_edge_weight(&2, &1), Some(OrderedFloat(3.5)));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_last_write_wins() {
    let mut graph: TestGraph = UndirectedGraph::new();
    graph.add_edge(1, 2, OrderedFloat(3.0)).unwrap();
    graph.add_edge(2, 1, OrderedFloat(9.0)).unwrap();

    assert_eq!(graph.get_edge_weight(&1, &2), Some(OrderedFloat(9.0)));
    assert_eq!(graph.get_edge_weight(&2, &1), Some(OrderedFloat(9.0)));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_rejects_negative_and_nan_weights() {
    let mut graph: TestGraph = UndirectedGraph::new();

    assert_eq!(
        graph.add_edge(0, 1, OrderedFloat(-1.0)),
        Err(Error::InvalidEdgeWeight(-1.0))
    );
    assert!(matches!(
        graph.add_edge(0, 1, OrderedFloat(f64::NAN)),
        Err(Error::InvalidEdgeWeight(_))
    ));

    // Nothing was created by the rejected calls
    assert_eq!(graph.vertex_count(), 0);
    assert!(graph.validate_non_negative());
}

#[test]
fn test_zero_weight_edge_is_accepted() {
    let mut graph: TestGraph = UndirectedGraph::new();
    graph.add_edge(0, 1, OrderedFloat(0.0)).unwrap();
    assert_eq!(graph.get_edge_weight(&0, &1), Some(OrderedFloat(0.0)));
}

#[test]
fn test_remove_vertex_prunes_neighbors() {
    let mut graph = sample_graph();
    assert!(graph.remove_vertex(&2));

    assert!(!graph.has_vertex(&2));
    assert_eq!(graph.vertex_count(), 3);
    for v in [0, 1, 3] {
        assert!(!graph.adjacency_of(&v).contains_key(&2));
    }
    assert_eq!(graph.edge_count(), 2);

    // Removing it again is a no-op
    assert!(!graph.remove_vertex(&2));
}

#[test]
fn test_remove_edge() {
    let mut graph = sample_graph();
    assert!(graph.remove_edge(&3, &1));

    assert!(!graph.has_edge(&1, &3));
    assert!(!graph.has_edge(&3, &1));
    assert!(graph.has_vertex(&3));
    assert_eq!(graph.edge_count(), 4);

    // Absent edge and absent endpoints are no-ops
    assert!(!graph.remove_edge(&1, &3));
    assert!(!graph.remove_edge(&0, &42));
    assert!(!graph.remove_edge(&41, &42));
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_edges_lists_each_undirected_edge_once() {
    let graph = sample_graph();
    let edges = graph.edges();
    assert_eq!(edges.len(), 5);

    let normalized: HashSet<(usize, usize, u64)> = edges
        .iter()
        .map(|&(a, b, w)| (a.min(b), a.max(b), w.into_inner() as u64))
        .collect();
    let expected: HashSet<(usize, usize, u64)> =
        [(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 1), (2, 3, 5)].into_iter().collect();
    assert_eq!(normalized, expected);
}

#[test]
fn test_vertices_and_adjacency_views() {
    let graph = sample_graph();

    let vertices: HashSet<usize> = graph.vertices().copied().collect();
    assert_eq!(vertices, [0, 1, 2, 3].into_iter().collect());

    let adjacency = graph.adjacency_of(&1);
    assert_eq!(adjacency.len(), 3);
    assert_eq!(adjacency.get(&0), Some(&OrderedFloat(4.0)));
    assert_eq!(adjacency.get(&3), Some(&OrderedFloat(1.0)));

    assert!(graph.adjacency_of(&99).is_empty());
    assert_eq!(graph.neighbors(&99).count(), 0);
}

#[test]
fn test_string_vertex_ids() {
    let mut graph: UndirectedGraph<String, OrderedFloat<f64>> = UndirectedGraph::new();
    graph
        .add_edge("paris".to_string(), "lyon".to_string(), OrderedFloat(465.0))
        .unwrap();

    assert_eq!(
        graph.get_edge_weight(&"lyon".to_string(), &"paris".to_string()),
        Some(OrderedFloat(465.0))
    );
    assert_eq!(graph.edges().len(), 1);
}

use dijkstra_compare::benchmark::{compare_on_graph, compare_performances, BenchmarkConfig};
use dijkstra_compare::graph::generators::{edge_count_for_density, generate_grid, generate_random_connected};
use dijkstra_compare::graph::Graph;
use dijkstra_compare::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_edge_count_for_density() {
    assert_eq!(edge_count_for_density(10, 0.3), 13);
    assert_eq!(edge_count_for_density(10, 0.0), 9);
    assert_eq!(edge_count_for_density(10, 1.0), 45);
    assert_eq!(edge_count_for_density(1, 0.5), 0);
}

#[test]
fn test_random_graph_is_connected_with_requested_edges() {
    let mut rng = StdRng::seed_from_u64(3);
    let graph = generate_random_connected(30, 60, 1, 10, &mut rng).unwrap();

    assert_eq!(graph.vertex_count(), 30);
    assert_eq!(graph.edge_count(), 60);
    for (a, b, w) in graph.edges() {
        assert_ne!(a, b);
        let w = w.into_inner();
        assert!((1.0..=10.0).contains(&w));
        assert_eq!(w.fract(), 0.0);
    }

    let comparison = compare_on_graph(&graph, 0).unwrap();
    assert!(comparison.distances_agree);
}

#[test]
fn test_random_graph_parameter_errors() {
    let mut rng = StdRng::seed_from_u64(3);

    assert!(matches!(
        generate_random_connected(10, 5, 1, 10, &mut rng),
        Err(Error::InvalidGraphParameters(_))
    ));
    assert!(matches!(
        generate_random_connected(5, 11, 1, 10, &mut rng),
        Err(Error::InvalidGraphParameters(_))
    ));
    assert!(matches!(
        generate_random_connected(0, 0, 1, 10, &mut rng),
        Err(Error::InvalidGraphParameters(_))
    ));
    assert!(matches!(
        generate_random_connected(5, 6, 9, 2, &mut rng),
        Err(Error::InvalidGraphParameters(_))
    ));
    assert!(generate_random_connected(5, 10, 1, 1, &mut rng).is_ok());
}

#[test]
fn test_grid_generator() {
    let graph = generate_grid(4, 3, 2.0).unwrap();
    assert_eq!(graph.vertex_count(), 12);
    // 3 horizontal edges per row, 4 vertical edges per row gap
    assert_eq!(graph.edge_count(), 3 * 3 + 4 * 2);
    assert!(graph.has_edge(&0, &4));
    assert!(!graph.has_edge(&3, &4));

    assert!(matches!(generate_grid(2, 2, -1.0), Err(Error::InvalidEdgeWeight(_))));
}

#[test]
fn test_sweep_report() {
    let config = BenchmarkConfig::default()
        .with_sizes(vec![5, 20, 40])
        .with_density(0.3)
        .with_seed(17);
    let report = compare_performances(&config).unwrap();

    assert_eq!(report.rounds.len(), 3);
    for (round, &n) in report.rounds.iter().zip(&config.sizes) {
        assert_eq!(round.vertices, n);
        assert_eq!(round.edges, edge_count_for_density(n, 0.3));
        assert!(round.distances_agree);
        assert_eq!(
            round.naive.aggregate_cost,
            round.naive.operations + round.naive.comparisons
        );
        assert!(round.naive.comparisons >= (n * (n + 1) / 2) as u64);
    }

    let table = report.render_table();
    assert_eq!(table.lines().count(), 2 + 3);
    assert!(table.starts_with("Vertices"));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["config"]["seed"], 17);
    assert_eq!(json["rounds"].as_array().unwrap().len(), 3);
}

#[test]
fn test_seeded_generator_is_reproducible() {
    let first = generate_random_connected(15, 40, 1, 10, &mut StdRng::seed_from_u64(8)).unwrap();
    let second = generate_random_connected(15, 40, 1, 10, &mut StdRng::seed_from_u64(8)).unwrap();

    let mut a = first.edges();
    let mut b = second.edges();
    for edges in [&mut a, &mut b] {
        for edge in edges.iter_mut() {
            if edge.0 > edge.1 {
                *edge = (edge.1, edge.0, edge.2);
            }
        }
        edges.sort();
    }
    assert_eq!(a, b);
}

#[test]
fn test_sweep_propagates_generator_errors() {
    let config = BenchmarkConfig::default()
        .with_sizes(vec![5])
        .with_weight_range(10, 1)
        .with_seed(1);
    assert!(matches!(
        compare_performances(&config),
        Err(Error::InvalidGraphParameters(_))
    ));
}

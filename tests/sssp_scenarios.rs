use sssp_engine::{
    calculate_distance_ratio, dijkstra, find_shortest_path, reconstruct_path, sssp, sssp_bounded,
    sssp_with_parents, Graph, INF,
};

#[test]
fn s1_four_vertex_diamond() {
    let _ = env_logger::try_init();
    let g = Graph::new(4, &[(0, 1, 1.0), (0, 2, 2.0), (1, 3, 1.5), (2, 3, 0.5)]).unwrap();
    assert_eq!(sssp(&g, 0).unwrap(), vec![0.0, 1.0, 2.0, 2.5]);

    let (distance, path) = find_shortest_path(&g, 0, 3).unwrap();
    assert_eq!(distance, 2.5);
    assert_eq!(path, vec![0, 1, 3]);
}

#[test]
fn s2_chain_graph() {
    let g = Graph::new(4, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 3.0), (2, 3, 2.0)]).unwrap();
    assert_eq!(sssp(&g, 0).unwrap(), vec![0.0, 1.0, 2.0, 4.0]);

    let (_, parent) = sssp_with_parents(&g, 0).unwrap();
    assert_eq!(reconstruct_path(&parent, 0, 3), vec![0, 1, 2, 3]);
}

#[test]
fn s3_bounded_search() {
    let g = Graph::new(4, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 3.0), (2, 3, 2.0)]).unwrap();
    assert_eq!(sssp_bounded(&g, 0, 2.5).unwrap(), vec![0.0, 1.0, 2.0, INF]);
}

#[test]
fn s4_selectivity_ratio() {
    let g = Graph::new(3, &[(0, 1, 1.0), (0, 2, 2.0)]).unwrap();
    assert_eq!(calculate_distance_ratio(&g, 0, 1, 2).unwrap(), 0.5);
    assert_eq!(calculate_distance_ratio(&g, 0, 2, 1).unwrap(), 2.0);
}

#[test]
fn agrees_with_reference_oracle_on_a_larger_graph() {
    let edges = [
        (0, 1, 4.0),
        (0, 2, 1.0),
        (2, 1, 1.0),
        (1, 3, 2.0),
        (2, 3, 6.0),
        (3, 4, 3.0),
        (4, 5, 1.0),
        (3, 5, 9.0),
        (5, 6, 2.0),
        (1, 6, 20.0),
    ];
    let g = Graph::new(7, &edges).unwrap();
    let expected = dijkstra(&g, 0).unwrap();
    let actual = sssp(&g, 0).unwrap();
    for v in 0..g.vertex_count() {
        assert!((expected[v] - actual[v]).abs() < 1e-10 || (!expected[v].is_finite() && !actual[v].is_finite()));
    }
}

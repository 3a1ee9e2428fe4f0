use sssp_engine::{
    compute_pareto_front, knee_point, MultiObjectiveEdge, MultiObjectiveGraph, Sense,
};

fn edge(source: usize, target: usize, weights: &[f64], edge_id: usize) -> MultiObjectiveEdge {
    MultiObjectiveEdge {
        source,
        target,
        weights: weights.to_vec(),
        edge_id,
    }
}

fn spec_s5_graph() -> MultiObjectiveGraph {
    let edges = vec![
        edge(0, 1, &[0.8, 0.2, 100.0], 1),
        edge(0, 2, &[0.5, 0.1, 200.0], 2),
        edge(1, 3, &[0.9, 0.3, 50.0], 3),
        edge(1, 4, &[0.7, 0.4, 75.0], 4),
        edge(2, 3, &[0.6, 0.1, 80.0], 5),
        edge(2, 4, &[0.8, 0.15, 60.0], 6),
    ];
    MultiObjectiveGraph::new(
        5,
        3,
        edges,
        vec!["benefit".into(), "risk".into(), "cost".into()],
        vec![Sense::Max, Sense::Min, Sense::Min],
    )
    .unwrap()
}

#[test]
fn s5_pareto_front_contains_both_non_dominated_paths() {
    let g = spec_s5_graph();
    let front = compute_pareto_front(&g, 0, 4, 50).unwrap();

    let close = |a: &[f64], b: &[f64]| a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9);
    assert!(front.iter().any(|s| close(&s.objectives, &[1.5, 0.6, 175.0])));
    assert!(front.iter().any(|s| close(&s.objectives, &[1.3, 0.25, 260.0])));
}

#[test]
fn s6_knee_point_tie_breaks_to_first_by_insertion_order() {
    let edges = vec![edge(0, 1, &[0.0, 10.0], 0), edge(0, 2, &[10.0, 0.0], 1)];
    let g = MultiObjectiveGraph::new(
        3,
        2,
        edges,
        vec!["a".into(), "b".into()],
        vec![Sense::Min, Sense::Min],
    )
    .unwrap();

    let front = compute_pareto_front(&g, 0, 1, 10)
        .unwrap()
        .into_iter()
        .chain(compute_pareto_front(&g, 0, 2, 10).unwrap())
        .collect::<Vec<_>>();

    let knee = knee_point(&front).unwrap();
    assert_eq!(knee.objectives, vec![0.0, 10.0]);
}

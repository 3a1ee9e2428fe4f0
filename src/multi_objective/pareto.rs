//! Pareto front enumeration via label propagation (spec §4.4.2) and the
//! path-objective recomputation helper (spec §4.4.7).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::Error;
use crate::multi_objective::dominance::dominates;
use crate::multi_objective::graph::MultiObjectiveGraph;
use crate::{Result, ABSOLUTE_TOL, INF};

/// One non-dominated label attached to a vertex during propagation: its
/// accumulated objective vector and a back-pointer into the parent vertex's
/// own label list, so path reconstruction is a plain index walk rather than
/// following owned pointers.
#[derive(Debug, Clone, PartialEq)]
struct Label {
    obj: Vec<f64>,
    parent_vertex: Option<usize>,
    parent_label_idx: usize,
}

/// A Pareto-optimal source-to-target solution: the true per-axis objective
/// values along the chosen path (not a scalarized aggregate), the vertex
/// path itself, and the parent vector that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParetoSolution {
    pub objectives: Vec<f64>,
    pub path: Vec<usize>,
    pub parent: Vec<Option<usize>>,
}

impl ParetoSolution {
    /// The sentinel ε-constraint/lexicographic return when no candidate
    /// satisfies the constraints: `objectives = [INF; d]`, empty path.
    pub fn infeasible(d: usize, n: usize) -> Self {
        ParetoSolution {
            objectives: vec![INF; d],
            path: Vec::new(),
            parent: vec![None; n],
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.objectives.iter().all(|v| v.is_finite())
    }
}

fn reconstruct(labels: &[Vec<Label>], n: usize, target: usize, idx: usize) -> Vec<Option<usize>> {
    let mut parent = vec![None; n];
    let mut current_v = target;
    let mut current_idx = idx;
    loop {
        let label = &labels[current_v][current_idx];
        match label.parent_vertex {
            None => break,
            Some(p) => {
                parent[current_v] = Some(p);
                current_idx = label.parent_label_idx;
                current_v = p;
            }
        }
    }
    parent
}

fn path_from_parent(parent: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    if target == source {
        return vec![source];
    }
    let mut path = vec![target];
    let mut current = target;
    while let Some(p) = parent[current] {
        path.push(p);
        current = p;
        if current == source {
            break;
        }
    }
    path.reverse();
    path
}

/// Enumerates non-dominated `source`-to-`target` solutions by propagating
/// labels through a FIFO queue with a processed-set guard, per spec §4.4.2.
/// Stops once the queue drains or `max_solutions` solutions are found.
pub fn compute_pareto_front(
    graph: &MultiObjectiveGraph,
    source: usize,
    target: usize,
    max_solutions: usize,
) -> Result<Vec<ParetoSolution>> {
    let n = graph.vertex_count();
    if source >= n {
        return Err(Error::VertexOutOfRange { vertex: source, n });
    }
    if target >= n {
        return Err(Error::VertexOutOfRange { vertex: target, n });
    }

    let d = graph.objective_count();
    let sense = graph.sense();

    let mut labels: Vec<Vec<Label>> = vec![Vec::new(); n];
    labels[source].push(Label {
        obj: vec![0.0; d],
        parent_vertex: None,
        parent_label_idx: 0,
    });

    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    queue.push_back((source, 0));
    let mut processed: HashSet<(usize, usize)> = HashSet::new();
    let mut solutions = Vec::new();

    if max_solutions == 0 {
        return Ok(solutions);
    }

    while let Some((u, idx)) = queue.pop_front() {
        if processed.contains(&(u, idx)) {
            continue;
        }
        processed.insert((u, idx));

        if u == target {
            let parent = reconstruct(&labels, n, target, idx);
            let path = path_from_parent(&parent, source, target);
            solutions.push(ParetoSolution {
                objectives: labels[u][idx].obj.clone(),
                path,
                parent,
            });
            if solutions.len() >= max_solutions {
                break;
            }
        }

        let current_obj = labels[u][idx].obj.clone();
        for &e in graph.outgoing_edges(u) {
            let edge = graph.edge(e);
            let v = edge.target;
            let new_obj: Vec<f64> = current_obj
                .iter()
                .zip(edge.weights.iter())
                .map(|(a, b)| a + b)
                .collect();

            if labels[v]
                .iter()
                .any(|l| dominates(&l.obj, &new_obj, sense, ABSOLUTE_TOL))
            {
                continue;
            }

            labels[v].retain(|l| !dominates(&new_obj, &l.obj, sense, ABSOLUTE_TOL));
            labels[v].push(Label {
                obj: new_obj,
                parent_vertex: Some(u),
                parent_label_idx: idx,
            });
            queue.push_back((v, labels[v].len() - 1));
        }
    }

    log::debug!(
        "pareto front from {} to {}: {} solutions",
        source,
        target,
        solutions.len()
    );

    Ok(solutions)
}

/// Recomputes the objective vector along a path described by `parent`,
/// summing the chosen edge's weight vector at each hop. If `edge_indices`
/// supplies an explicit edge id per target vertex it is used directly;
/// otherwise the adjacency of the predecessor is scanned for a matching
/// edge. Returns `[INF; d]` if the path is broken.
pub fn compute_path_objectives(
    mog: &MultiObjectiveGraph,
    parent: &[Option<usize>],
    source: usize,
    target: usize,
    edge_indices: Option<&HashMap<usize, usize>>,
) -> Vec<f64> {
    let d = mog.objective_count();
    if target == source {
        return vec![0.0; d];
    }
    if parent[target].is_none() {
        return vec![INF; d];
    }

    let mut path = vec![target];
    let mut current = target;
    loop {
        match parent[current] {
            Some(p) => {
                path.push(p);
                current = p;
                if current == source {
                    break;
                }
            }
            None => return vec![INF; d],
        }
        if path.len() > parent.len() {
            return vec![INF; d];
        }
    }
    path.reverse();

    let mut total = vec![0.0; d];
    for pair in path.windows(2) {
        let (u, v) = (pair[0], pair[1]);
        let weights = edge_indices
            .and_then(|map| map.get(&v))
            .map(|&e| mog.edge(e).weights.clone())
            .or_else(|| {
                mog.outgoing_edges(u).iter().find_map(|&e| {
                    let edge = mog.edge(e);
                    if edge.target == v {
                        Some(edge.weights.clone())
                    } else {
                        None
                    }
                })
            });

        match weights {
            Some(w) => {
                for i in 0..d {
                    total[i] += w[i];
                }
            }
            None => return vec![INF; d],
        }
    }
    total
}

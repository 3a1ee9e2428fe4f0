//! The three scalarization strategies (spec §4.4.3-5): weighted-sum,
//! ε-constraint, and lexicographic priority, each reducing (or filtering)
//! the vector objective down to something the scalar SSSP kernel can solve.

use crate::algorithm::path::reconstruct_path;
use crate::algorithm::sssp::sssp_with_parents;
use crate::error::Error;
use crate::graph::Graph;
use crate::multi_objective::graph::{MultiObjectiveGraph, Sense};
use crate::multi_objective::pareto::{compute_pareto_front, ParetoSolution};
use crate::{Result, ABSOLUTE_TOL, WEIGHT_SUM_TOL};

/// Cap on the Pareto front computed internally by [`epsilon_constraint`]
/// before filtering — large enough that a missed trade-off would have to
/// come from a genuinely unbounded front, which spec.md's Non-goals already
/// exclude.
const INTERNAL_PARETO_CAP: usize = 1000;

fn require_all_minimize(graph: &MultiObjectiveGraph) -> Result<()> {
    if graph.all_minimize() {
        return Ok(());
    }
    let idx = graph
        .sense()
        .iter()
        .position(|s| *s == Sense::Max)
        .expect("all_minimize is false, so some axis must be Sense::Max");
    Err(Error::MixedObjectiveSense(idx))
}

/// Reduces the vector objective to a single scalar `sum_i weights[i] *
/// edge.weights[i]`, runs the scalar kernel, then recomputes the true
/// per-axis objectives along the winning path.
///
/// Requires every objective sense to be `Min` (callers transform `Max`
/// objectives into costs beforehand) and `weights` to sum to `1.0` within
/// [`WEIGHT_SUM_TOL`].
pub fn weighted_sum(
    graph: &MultiObjectiveGraph,
    source: usize,
    target: usize,
    weights: &[f64],
) -> Result<ParetoSolution> {
    let d = graph.objective_count();
    if weights.len() != d {
        return Err(Error::DimensionMismatch {
            expected: d,
            actual: weights.len(),
        });
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOL {
        return Err(Error::WeightsDontSumToOne(sum));
    }
    require_all_minimize(graph)?;

    let n = graph.vertex_count();
    if source >= n {
        return Err(Error::VertexOutOfRange { vertex: source, n });
    }
    if target >= n {
        return Err(Error::VertexOutOfRange { vertex: target, n });
    }

    let scalar_edges: Vec<(usize, usize, f64)> = (0..graph.edge_count())
        .map(|i| {
            let edge = graph.edge(i);
            let w: f64 = weights.iter().zip(edge.weights.iter()).map(|(a, b)| a * b).sum();
            (edge.source, edge.target, w)
        })
        .collect();
    let scalar_graph = Graph::new(n, &scalar_edges)?;
    let (dist, parent) = sssp_with_parents(&scalar_graph, source)?;

    if !dist[target].is_finite() {
        return Ok(ParetoSolution::infeasible(d, n));
    }

    let path = reconstruct_path(&parent, source, target);
    let mut objectives = vec![0.0; d];
    for pair in path.windows(2) {
        let (u, v) = (pair[0], pair[1]);
        let candidates: Vec<usize> = scalar_graph
            .outgoing_edges(u)
            .iter()
            .copied()
            .filter(|&e| scalar_graph.edge(e).target == v)
            .collect();
        let chosen = candidates
            .iter()
            .copied()
            .find(|&e| (dist[u] + scalar_graph.weight(e) - dist[v]).abs() < ABSOLUTE_TOL)
            .or_else(|| candidates.first().copied());
        if let Some(e) = chosen {
            let mo_edge = graph.edge(e);
            for i in 0..d {
                objectives[i] += mo_edge.weights[i];
            }
        }
    }

    Ok(ParetoSolution {
        objectives,
        path,
        parent,
    })
}

/// Constrains every non-primary axis (upper bound under `Min`, lower bound
/// under `Max`; `±∞` disables a bound) and selects, among the Pareto-front
/// solutions that satisfy every constraint, the one optimizing
/// `primary_objective`. Returns the infeasibility sentinel if nothing
/// survives the constraints.
pub fn epsilon_constraint(
    graph: &MultiObjectiveGraph,
    source: usize,
    target: usize,
    primary_objective: usize,
    constraints: &[f64],
) -> Result<ParetoSolution> {
    let d = graph.objective_count();
    if constraints.len() != d {
        return Err(Error::DimensionMismatch {
            expected: d,
            actual: constraints.len(),
        });
    }
    if primary_objective >= d {
        return Err(Error::DimensionMismatch {
            expected: d,
            actual: primary_objective,
        });
    }

    let n = graph.vertex_count();
    let front = compute_pareto_front(graph, source, target, INTERNAL_PARETO_CAP)?;
    let sense = graph.sense();

    let satisfies_constraints = |solution: &ParetoSolution| -> bool {
        for (i, &bound) in constraints.iter().enumerate() {
            if i == primary_objective || !bound.is_finite() {
                continue;
            }
            let ok = match sense[i] {
                Sense::Min => solution.objectives[i] <= bound + ABSOLUTE_TOL,
                Sense::Max => solution.objectives[i] >= bound - ABSOLUTE_TOL,
            };
            if !ok {
                return false;
            }
        }
        true
    };

    let survivors: Vec<&ParetoSolution> = front.iter().filter(|s| satisfies_constraints(s)).collect();
    if survivors.is_empty() {
        return Ok(ParetoSolution::infeasible(d, n));
    }

    let best = match sense[primary_objective] {
        Sense::Min => survivors
            .into_iter()
            .min_by(|a, b| {
                a.objectives[primary_objective]
                    .partial_cmp(&b.objectives[primary_objective])
                    .unwrap()
            })
            .unwrap(),
        Sense::Max => survivors
            .into_iter()
            .max_by(|a, b| {
                a.objectives[primary_objective]
                    .partial_cmp(&b.objectives[primary_objective])
                    .unwrap()
            })
            .unwrap(),
    };

    Ok(best.clone())
}

/// Iteratively restricts the edge set to one that is optimal for each
/// objective in `priority_order`, most important first: for axis `o`, runs
/// the scalar kernel on the edges still active and keeps only the edges
/// that participate in some shortest path for `o` (`dist[u] + w == dist[v]`
/// within [`ABSOLUTE_TOL`]). Returns the infeasibility sentinel if any axis
/// is unreachable or the restriction empties out before all priorities are
/// processed.
pub fn lexicographic(
    graph: &MultiObjectiveGraph,
    source: usize,
    target: usize,
    priority_order: &[usize],
) -> Result<ParetoSolution> {
    require_all_minimize(graph)?;

    let d = graph.objective_count();
    let n = graph.vertex_count();
    if priority_order.is_empty() {
        return Err(Error::DimensionMismatch { expected: 1, actual: 0 });
    }
    for &o in priority_order {
        if o >= d {
            return Err(Error::DimensionMismatch { expected: d, actual: o });
        }
    }

    let mut active: Vec<usize> = (0..graph.edge_count()).collect();
    let mut last_parent: Vec<Option<usize>> = vec![None; n];

    for &o in priority_order {
        let triples: Vec<(usize, usize, f64)> = active
            .iter()
            .map(|&e| {
                let edge = graph.edge(e);
                (edge.source, edge.target, edge.weights[o])
            })
            .collect();
        let scalar_graph = Graph::new(n, &triples)?;
        let (dist, parent) = sssp_with_parents(&scalar_graph, source)?;

        if !dist[target].is_finite() {
            return Ok(ParetoSolution::infeasible(d, n));
        }
        last_parent = parent;

        let retained: Vec<usize> = active
            .iter()
            .copied()
            .filter(|&e| {
                let edge = graph.edge(e);
                dist[edge.source].is_finite()
                    && (dist[edge.source] + edge.weights[o] - dist[edge.target]).abs() < ABSOLUTE_TOL
            })
            .collect();

        if retained.is_empty() {
            return Ok(ParetoSolution::infeasible(d, n));
        }
        active = retained;
    }

    let path = reconstruct_path(&last_parent, source, target);
    let mut objectives = vec![0.0; d];
    for pair in path.windows(2) {
        let (u, v) = (pair[0], pair[1]);
        match active
            .iter()
            .copied()
            .find(|&e| graph.edge(e).source == u && graph.edge(e).target == v)
        {
            Some(e) => {
                let edge = graph.edge(e);
                for i in 0..d {
                    objectives[i] += edge.weights[i];
                }
            }
            None => return Ok(ParetoSolution::infeasible(d, n)),
        }
    }

    Ok(ParetoSolution {
        objectives,
        path,
        parent: last_parent,
    })
}

//! Knee-point selection (spec §4.4.6): the Pareto solution farthest from
//! the utopia point after per-axis min-max normalization.

use crate::multi_objective::pareto::ParetoSolution;

/// Normalizes every objective axis to `[0, 1]` using the (utopia, nadir)
/// extremes observed across `front` (an axis with `nadir - utopia ≤
/// 1e-10` normalizes to `0` for every solution), then returns the solution
/// maximizing the Euclidean norm of its normalized vector. Ties keep the
/// first solution encountered, matching the front's insertion order.
pub fn knee_point(front: &[ParetoSolution]) -> Option<ParetoSolution> {
    match front.len() {
        0 => return None,
        1 => return Some(front[0].clone()),
        _ => {}
    }

    let d = front[0].objectives.len();
    let mut utopia = vec![f64::INFINITY; d];
    let mut nadir = vec![f64::NEG_INFINITY; d];
    for solution in front {
        for i in 0..d {
            utopia[i] = utopia[i].min(solution.objectives[i]);
            nadir[i] = nadir[i].max(solution.objectives[i]);
        }
    }

    let mut best_idx = 0;
    let mut best_norm = f64::NEG_INFINITY;
    for (idx, solution) in front.iter().enumerate() {
        let mut norm_sq = 0.0;
        for i in 0..d {
            let span = nadir[i] - utopia[i];
            let normalized = if span > 1e-10 {
                (solution.objectives[i] - utopia[i]) / span
            } else {
                0.0
            };
            norm_sq += normalized * normalized;
        }
        let norm = norm_sq.sqrt();
        if norm > best_norm {
            best_norm = norm;
            best_idx = idx;
        }
    }

    Some(front[best_idx].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solution(objectives: Vec<f64>) -> ParetoSolution {
        ParetoSolution {
            objectives,
            path: Vec::new(),
            parent: Vec::new(),
        }
    }

    #[test]
    fn empty_front_has_no_knee() {
        assert!(knee_point(&[]).is_none());
    }

    #[test]
    fn single_solution_front_returns_it() {
        let front = vec![solution(vec![1.0, 2.0])];
        assert_eq!(knee_point(&front), Some(front[0].clone()));
    }

    #[test]
    fn spec_s6_tie_breaks_to_first() {
        let front = vec![solution(vec![0.0, 10.0]), solution(vec![10.0, 0.0])];
        let knee = knee_point(&front).unwrap();
        assert_eq!(knee.objectives, vec![0.0, 10.0]);
    }
}

//! Pareto dominance (spec §4.4.1).

use crate::multi_objective::graph::Sense;
use crate::ABSOLUTE_TOL;

/// `a` dominates `b` iff `a` is no worse than `b` on every axis (within
/// `atol`) and strictly better on at least one axis (outside `atol`),
/// "better" interpreted per each axis's [`Sense`].
pub fn dominates(a: &[f64], b: &[f64], sense: &[Sense], atol: f64) -> bool {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), sense.len());

    let mut strictly_better_somewhere = false;
    for i in 0..a.len() {
        let (better, worse) = match sense[i] {
            Sense::Min => (a[i] < b[i] - atol, a[i] > b[i] + atol),
            Sense::Max => (a[i] > b[i] + atol, a[i] < b[i] - atol),
        };
        if worse {
            return false;
        }
        if better {
            strictly_better_somewhere = true;
        }
    }
    strictly_better_somewhere
}

/// [`dominates`] with the crate's default [`ABSOLUTE_TOL`].
pub fn dominates_default_tol(a: &[f64], b: &[f64], sense: &[Sense]) -> bool {
    dominates(a, b, sense, ABSOLUTE_TOL)
}

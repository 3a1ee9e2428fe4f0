//! Label-setting multi-objective Pareto front solver (spec §4.4): dominance,
//! Pareto front enumeration, three scalarization strategies, and knee-point
//! selection layered on top of the scalar [`crate::algorithm`] kernel.

pub mod dominance;
pub mod graph;
pub mod knee;
pub mod pareto;
pub mod scalarization;

pub use dominance::dominates;
pub use graph::{MultiObjectiveEdge, MultiObjectiveGraph, Sense};
pub use knee::knee_point;
pub use pareto::{compute_pareto_front, compute_path_objectives, ParetoSolution};
pub use scalarization::{epsilon_constraint, lexicographic, weighted_sum};

//! Recursive frontier-sparsifying single-source shortest paths (the "DMY"
//! scheme, after "Breaking the Sorting Barrier for Directed Single-Source
//! Shortest Paths") plus a label-setting multi-objective Pareto front solver.
//!
//! The scalar kernel in [`algorithm`] solves SSSP on directed graphs with
//! finite, non-negative edge weights by recursively layering the reachable
//! vertex set, relaxing edges in bounded multi-source rounds (BMSSP), and
//! partitioning work into pivot-seeded blocks. [`multi_objective`] builds on
//! a vector-weighted sibling of [`graph::Graph`] to enumerate Pareto-optimal
//! paths under mixed minimize/maximize objectives.

pub mod algorithm;
mod error;
pub mod graph;
pub mod multi_objective;

pub use algorithm::dijkstra::dijkstra;
pub use algorithm::path::{
    analyze_connectivity, calculate_distance_ratio, calculate_path_preference, compare_sources,
    find_reachable_vertices, find_shortest_path, path_length, reconstruct_path,
    shortest_path_tree, ConnectivitySummary,
};
pub use algorithm::sssp::{
    sssp, sssp_bounded, sssp_statistics, sssp_with_parents, SsspStatistics,
};
pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use multi_objective::{
    compute_pareto_front, epsilon_constraint, knee_point, lexicographic, weighted_sum,
    MultiObjectiveEdge, MultiObjectiveGraph, ParetoSolution, Sense,
};

/// Sentinel distance for unreachable vertices.
pub const INF: f64 = f64::INFINITY;

/// Absolute tolerance used for floating-point equality and dominance comparisons.
pub const ABSOLUTE_TOL: f64 = 1e-10;

/// Slack added above a block's maximum distance when computing its recursive bound.
pub const EPSILON_BLOCK_BOUND: f64 = 1e-9;

/// Tolerance for the weighted-sum scalarization's "weights sum to 1" precondition.
pub const WEIGHT_SUM_TOL: f64 = 1e-6;

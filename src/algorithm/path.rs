//! Path reconstruction and the generic analysis helpers built on top of
//! [`sssp`] (spec §4.3.6 and §4.3.7).

use std::collections::HashMap;

use crate::algorithm::sssp::{sssp, sssp_with_parents};
use crate::graph::Graph;
use crate::{Result, INF};

/// Walks `parent` back from `target` to `source`, returning the vertex
/// sequence in source-to-target order. Returns an empty path if `target`
/// has no recorded parent and isn't `source` itself, or if the walk doesn't
/// land on `source` within `parent.len()` steps (a cycle, which a correct
/// SSSP run never produces, but the walk is bounded defensively).
pub fn reconstruct_path(parent: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    if target == source {
        return vec![source];
    }
    if parent[target].is_none() {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    for _ in 0..parent.len() {
        match parent[current] {
            Some(p) => {
                path.push(p);
                current = p;
                if current == source {
                    path.reverse();
                    return path;
                }
            }
            None => return Vec::new(),
        }
    }
    Vec::new()
}

/// Reconstructed paths from `source` to every vertex that has one.
pub fn shortest_path_tree(parent: &[Option<usize>], source: usize) -> HashMap<usize, Vec<usize>> {
    let mut tree = HashMap::new();
    for target in 0..parent.len() {
        let path = reconstruct_path(parent, source, target);
        if !path.is_empty() {
            tree.insert(target, path);
        }
    }
    tree
}

/// Sums edge weights along `path`; `INF` if any consecutive pair lacks a
/// direct edge.
pub fn path_length(path: &[usize], graph: &Graph) -> f64 {
    if path.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for pair in path.windows(2) {
        match graph.edge_weight_between(pair[0], pair[1]) {
            Some(w) => total += w,
            None => return INF,
        }
    }
    total
}

/// Distance and reconstructed path from `s` to `t`.
pub fn find_shortest_path(graph: &Graph, s: usize, t: usize) -> Result<(f64, Vec<usize>)> {
    let (dist, parent) = sssp_with_parents(graph, s)?;
    Ok((dist[t], reconstruct_path(&parent, s, t)))
}

/// Vertices reachable from `s` within `max_dist`.
pub fn find_reachable_vertices(graph: &Graph, s: usize, max_dist: f64) -> Result<Vec<usize>> {
    let dist = sssp(graph, s)?;
    Ok((0..dist.len()).filter(|&v| dist[v] <= max_dist).collect())
}

/// Connectivity summary for an SSSP run from `s`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectivitySummary {
    pub reachable_count: usize,
    pub unreachable_count: usize,
    pub connectivity_ratio: f64,
    pub avg_distance: f64,
    pub min_distance: f64,
    pub max_distance: f64,
}

/// Summarizes how much of the graph `s` can reach and how far.
pub fn analyze_connectivity(graph: &Graph, s: usize) -> Result<ConnectivitySummary> {
    let dist = sssp(graph, s)?;
    let n = dist.len();
    let finite: Vec<f64> = dist.iter().copied().filter(|d| d.is_finite()).collect();
    let reachable_count = finite.len();
    let unreachable_count = n - reachable_count;

    let (avg_distance, min_distance, max_distance) = if finite.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        let sum: f64 = finite.iter().sum();
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (sum / finite.len() as f64, min, max)
    };

    Ok(ConnectivitySummary {
        reachable_count,
        unreachable_count,
        connectivity_ratio: reachable_count as f64 / n as f64,
        avg_distance,
        min_distance,
        max_distance,
    })
}

/// Distance from each of `sources` to `target`.
pub fn compare_sources(graph: &Graph, sources: &[usize], target: usize) -> Result<HashMap<usize, f64>> {
    let mut result = HashMap::new();
    for &s in sources {
        let dist = sssp(graph, s)?;
        result.insert(s, dist[target]);
    }
    Ok(result)
}

/// `dist(s, t1) / dist(s, t2)`, with the `INF`-handling rules spec §4.3.7
/// specifies: both unreachable is a 1.0 tie; only `t2` unreachable diverges
/// to `+INF`; only `t1` unreachable collapses to 0.0; and a zero-distance
/// `t2` (i.e. `t2 == s`) also collapses to 0.0 to avoid a division by zero.
pub fn calculate_distance_ratio(graph: &Graph, s: usize, t1: usize, t2: usize) -> Result<f64> {
    let dist = sssp(graph, s)?;
    let d1 = dist[t1];
    let d2 = dist[t2];

    if !d1.is_finite() && !d2.is_finite() {
        return Ok(1.0);
    }
    if !d2.is_finite() {
        return Ok(INF);
    }
    if !d1.is_finite() {
        return Ok(0.0);
    }
    if d2 == 0.0 {
        return Ok(0.0);
    }
    Ok(d1 / d2)
}

/// `calculate_distance_ratio(s, alt, preferred)` — how much farther the
/// alternative destination is relative to the preferred one.
pub fn calculate_path_preference(graph: &Graph, s: usize, preferred: usize, alt: usize) -> Result<f64> {
    calculate_distance_ratio(graph, s, alt, preferred)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstructs_diamond_path_matching_spec_s1() {
        let g = Graph::new(4, &[(0, 1, 1.0), (0, 2, 2.0), (1, 3, 1.5), (2, 3, 0.5)]).unwrap();
        let (distance, path) = find_shortest_path(&g, 0, 3).unwrap();
        assert_eq!(distance, 2.5);
        assert_eq!(path, vec![0, 1, 3]);
    }

    #[test]
    fn reconstructs_chain_path_matching_spec_s2() {
        let g = Graph::new(4, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 3.0), (2, 3, 2.0)]).unwrap();
        let (_, parent) = sssp_with_parents(&g, 0).unwrap();
        assert_eq!(reconstruct_path(&parent, 0, 3), vec![0, 1, 2, 3]);
    }

    #[test]
    fn path_length_matches_distance_for_every_reachable_vertex() {
        let g = Graph::new(
            5,
            &[(0, 1, 2.0), (1, 2, 3.0), (0, 3, 7.0), (3, 4, 1.0), (2, 4, 1.0)],
        )
        .unwrap();
        let (dist, parent) = sssp_with_parents(&g, 0).unwrap();
        for v in 0..g.vertex_count() {
            if dist[v].is_finite() {
                let path = reconstruct_path(&parent, 0, v);
                assert!((path_length(&path, &g) - dist[v]).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn unreachable_target_has_no_path() {
        let g = Graph::new(3, &[(0, 1, 1.0)]).unwrap();
        let (_, parent) = sssp_with_parents(&g, 0).unwrap();
        assert!(reconstruct_path(&parent, 0, 2).is_empty());
    }

    #[test]
    fn distance_ratio_matches_spec_s4() {
        let g = Graph::new(3, &[(0, 1, 1.0), (0, 2, 2.0)]).unwrap();
        assert_eq!(calculate_distance_ratio(&g, 0, 1, 2).unwrap(), 0.5);
        assert_eq!(calculate_distance_ratio(&g, 0, 2, 1).unwrap(), 2.0);
    }

    #[test]
    fn distance_ratio_handles_unreachable_targets() {
        let g = Graph::new(3, &[(0, 1, 1.0)]).unwrap();
        assert_eq!(calculate_distance_ratio(&g, 0, 2, 2).unwrap(), 1.0);
        assert_eq!(calculate_distance_ratio(&g, 0, 1, 2).unwrap(), INF);
        assert_eq!(calculate_distance_ratio(&g, 0, 2, 1).unwrap(), 0.0);
    }

    #[test]
    fn connectivity_summary_counts_reachability() {
        let g = Graph::new(4, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let summary = analyze_connectivity(&g, 0).unwrap();
        assert_eq!(summary.reachable_count, 3);
        assert_eq!(summary.unreachable_count, 1);
    }
}

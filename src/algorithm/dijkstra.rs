//! Reference SSSP oracle (spec §4.2).
//!
//! Deliberately a plain label-setting algorithm with linear-scan extraction
//! of the minimum unvisited distance, not a heap: its job is to be obviously
//! correct so the DMY kernel in [`super::sssp`] can be checked against it,
//! not to be fast.

use crate::error::Error;
use crate::graph::Graph;
use crate::{Result, INF};

/// Computes shortest-path distances from `source` to every vertex using a
/// straightforward Dijkstra with linear-scan minimum extraction.
pub fn dijkstra(graph: &Graph, source: usize) -> Result<Vec<f64>> {
    let n = graph.vertex_count();
    if source >= n {
        return Err(Error::SourceNotFound);
    }

    let mut dist = vec![INF; n];
    let mut visited = vec![false; n];
    dist[source] = 0.0;

    for _ in 0..n {
        let u = match extract_min_unvisited(&dist, &visited) {
            Some(u) => u,
            None => break,
        };
        visited[u] = true;

        for (v, weight) in graph.out_neighbors(u) {
            if visited[v] {
                continue;
            }
            let candidate = dist[u] + weight;
            if candidate < dist[v] {
                dist[v] = candidate;
            }
        }
    }

    Ok(dist)
}

/// Linear scan for the unvisited vertex with the smallest finite distance.
fn extract_min_unvisited(dist: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (v, (&d, &seen)) in dist.iter().zip(visited.iter()).enumerate() {
        if seen || !d.is_finite() {
            continue;
        }
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((v, d)),
        }
    }
    best.map(|(v, _)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diamond_graph() {
        let g = Graph::new(4, &[(0, 1, 1.0), (0, 2, 2.0), (1, 3, 1.5), (2, 3, 0.5)]).unwrap();
        let dist = dijkstra(&g, 0).unwrap();
        assert_eq!(dist, vec![0.0, 1.0, 2.0, 2.5]);
    }

    #[test]
    fn unreachable_vertex_stays_infinite() {
        let g = Graph::new(3, &[(0, 1, 1.0)]).unwrap();
        let dist = dijkstra(&g, 0).unwrap();
        assert_eq!(dist[2], INF);
    }

    #[test]
    fn invalid_source_is_an_error() {
        let g = Graph::new(2, &[(0, 1, 1.0)]).unwrap();
        assert_eq!(dijkstra(&g, 5).unwrap_err(), Error::SourceNotFound);
    }
}

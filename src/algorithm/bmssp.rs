//! Bounded multi-source relaxation (spec §4.3.3): the inner Bellman-Ford-
//! style loop the recursive layer calls once per frame.

use crate::graph::Graph;

/// Runs up to `k` rounds of relaxation starting from `frontier`, writing
/// into the caller-owned `dist`/`parent` buffers.
///
/// Each round iterates the *current* frontier in ascending vertex-id order
/// (the order the recursive layer already sorted it into) and relaxes every
/// outgoing edge of a frontier vertex whose distance is finite and `≤
/// bound`. An edge updates `dist[v]` iff the candidate is strictly smaller
/// than the current value and `≤ bound`; on update `parent[v]` is set to the
/// relaxing vertex and `v` joins the next round's frontier. Stops early if a
/// round makes zero updates. Returns the frontier produced by the last
/// executed round (possibly empty).
pub fn bmssp(
    graph: &Graph,
    dist: &mut [f64],
    parent: &mut [Option<usize>],
    frontier: &[usize],
    bound: f64,
    k: usize,
) -> Vec<usize> {
    let mut current: Vec<usize> = frontier.to_vec();
    current.sort_unstable();
    current.dedup();

    log::debug!(
        "bmssp: frontier_size={} bound={} k={}",
        current.len(),
        bound,
        k
    );

    let mut last_frontier = current.clone();

    for round in 0..k.max(1) {
        if current.is_empty() {
            break;
        }

        let mut next: Vec<usize> = Vec::new();
        for &u in &current {
            if !dist[u].is_finite() || dist[u] > bound {
                continue;
            }
            for (v, weight) in graph.out_neighbors(u) {
                let candidate = dist[u] + weight;
                if candidate < dist[v] && candidate <= bound {
                    dist[v] = candidate;
                    parent[v] = Some(u);
                    next.push(v);
                }
            }
        }

        if next.is_empty() {
            log::trace!("bmssp: round {round} made no updates, stopping early");
            last_frontier = Vec::new();
            break;
        }

        next.sort_unstable();
        next.dedup();
        log::trace!("bmssp: round {round} produced next frontier of size {}", next.len());
        last_frontier = next.clone();
        current = next;
    }

    last_frontier
}

/// Diagnostics returned by [`bmssp_with_statistics`], mirroring the
/// teacher's instrumented algorithm variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmsspStatistics {
    pub initial_frontier_size: usize,
    pub rounds_performed: usize,
    pub total_relaxations: usize,
    pub vertices_updated: usize,
    pub early_termination: bool,
    pub final_frontier_size: usize,
}

/// Same contract as [`bmssp`], plus round/relaxation/termination counters.
pub fn bmssp_with_statistics(
    graph: &Graph,
    dist: &mut [f64],
    parent: &mut [Option<usize>],
    frontier: &[usize],
    bound: f64,
    k: usize,
) -> (Vec<usize>, BmsspStatistics) {
    let mut current: Vec<usize> = frontier.to_vec();
    current.sort_unstable();
    current.dedup();
    let initial_frontier_size = current.len();

    let mut rounds_performed = 0;
    let mut total_relaxations = 0;
    let mut updated_vertices = std::collections::HashSet::new();
    let mut early_termination = false;
    let mut last_frontier = current.clone();

    for _ in 0..k.max(1) {
        if current.is_empty() {
            break;
        }
        rounds_performed += 1;

        let mut next: Vec<usize> = Vec::new();
        for &u in &current {
            if !dist[u].is_finite() || dist[u] > bound {
                continue;
            }
            for (v, weight) in graph.out_neighbors(u) {
                total_relaxations += 1;
                let candidate = dist[u] + weight;
                if candidate < dist[v] && candidate <= bound {
                    dist[v] = candidate;
                    parent[v] = Some(u);
                    updated_vertices.insert(v);
                    next.push(v);
                }
            }
        }

        if next.is_empty() {
            early_termination = true;
            last_frontier = Vec::new();
            break;
        }

        next.sort_unstable();
        next.dedup();
        last_frontier = next.clone();
        current = next;
    }

    let stats = BmsspStatistics {
        initial_frontier_size,
        rounds_performed,
        total_relaxations,
        vertices_updated: updated_vertices.len(),
        early_termination,
        final_frontier_size: last_frontier.len(),
    };

    (last_frontier, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INF;

    #[test]
    fn relaxes_chain_within_k_rounds() {
        let g = Graph::new(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap();
        let mut dist = vec![INF; 4];
        let mut parent = vec![None; 4];
        dist[0] = 0.0;

        bmssp(&g, &mut dist, &mut parent, &[0], INF, 3);
        assert_eq!(dist, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(parent, vec![None, Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn respects_bound() {
        let g = Graph::new(3, &[(0, 1, 1.0), (1, 2, 5.0)]).unwrap();
        let mut dist = vec![INF; 3];
        let mut parent = vec![None; 3];
        dist[0] = 0.0;

        bmssp(&g, &mut dist, &mut parent, &[0], 2.0, 5);
        assert_eq!(dist[1], 1.0);
        assert_eq!(dist[2], INF);
    }

    #[test]
    fn stops_early_when_no_updates() {
        let g = Graph::new(2, &[(0, 1, 1.0)]).unwrap();
        let mut dist = vec![INF; 2];
        let mut parent = vec![None; 2];
        dist[0] = 0.0;

        let (_, stats) = bmssp_with_statistics(&g, &mut dist, &mut parent, &[0], INF, 10);
        assert!(stats.early_termination);
        assert_eq!(stats.rounds_performed, 2);
        assert_eq!(stats.vertices_updated, 1);
    }

    #[test]
    fn caps_rounds_at_k() {
        let g = Graph::new(5, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 4, 1.0)]).unwrap();
        let mut dist = vec![INF; 5];
        let mut parent = vec![None; 5];
        dist[0] = 0.0;

        let (_, stats) = bmssp_with_statistics(&g, &mut dist, &mut parent, &[0], INF, 2);
        assert_eq!(stats.rounds_performed, 2);
        assert_eq!(dist[2], 2.0);
        assert_eq!(dist[3], INF);
    }
}

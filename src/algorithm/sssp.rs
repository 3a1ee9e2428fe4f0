//! Top-level SSSP driver (spec §4.3.1) and the recursive layering
//! (spec §4.3.2) that ties pivots, BMSSP, and block partitioning together.

use std::time::Instant;

use crate::algorithm::blocks::partition_blocks;
use crate::algorithm::bmssp::bmssp;
use crate::algorithm::pivots::select_pivots;
use crate::error::Error;
use crate::graph::Graph;
use crate::{Result, INF};

/// Below this universe size, [`recursive_layer`] relaxes to a fixed point
/// directly instead of selecting pivots and partitioning further.
const BASE_CASE_SIZE: usize = 16;

/// `k = max(1, ceil(size^(1/3)))` — the pivot/BMSSP round threshold.
fn pivot_threshold(size: usize) -> usize {
    ((size as f64).cbrt().ceil() as usize).max(1)
}

/// `t = max(1, ceil(ln(max(size, 2))^(1/3)))` — the block-count exponent.
fn partition_parameter(size: usize) -> u32 {
    let n = (size.max(2)) as f64;
    ((n.ln().max(0.0).cbrt().ceil()) as u32).max(1)
}

/// A frame of the explicit work stack [`recursive_layer`] uses in place of
/// direct recursion, so deep graphs don't risk the call stack.
struct Frame {
    u: Vec<usize>,
    s: Vec<usize>,
    bound: f64,
}

/// Propagates distances to every vertex in `u` reachable within `bound` from
/// `s`, mutating `dist`/`parent` in place.
///
/// Implements spec §4.3.2 as an explicit stack of `(U, S, bound)` frames
/// rather than true recursion (per the design note preferring iteration for
/// deep graphs): below [`BASE_CASE_SIZE`] a frame relaxes directly to a
/// fixed point; otherwise it runs one BMSSP pass, selects pivots from the
/// filtered candidate set, partitions into blocks, and pushes one child
/// frame per block so they pop (and process) in ascending distance order.
fn recursive_layer(graph: &Graph, dist: &mut [f64], parent: &mut [Option<usize>], u: Vec<usize>, s: Vec<usize>, bound: f64) {
    let mut stack = vec![Frame { u, s, bound }];

    while let Some(frame) = stack.pop() {
        if frame.u.is_empty() || frame.s.is_empty() {
            continue;
        }

        if frame.u.len() <= BASE_CASE_SIZE {
            let mut seed: Vec<usize> = frame.s.clone();
            seed.sort_unstable();
            bmssp(graph, dist, parent, &seed, frame.bound, frame.u.len().max(1));
            continue;
        }

        let k = pivot_threshold(frame.u.len());
        let t = partition_parameter(frame.u.len());

        let mut seed: Vec<usize> = frame.s.clone();
        seed.sort_unstable();
        bmssp(graph, dist, parent, &seed, frame.bound, k);

        let in_s: std::collections::HashSet<usize> = frame.s.iter().copied().collect();
        let reachable_below_bound: Vec<usize> = frame
            .u
            .iter()
            .copied()
            .filter(|v| !in_s.contains(v) && dist[*v] < frame.bound)
            .collect();

        let pivots = select_pivots(&reachable_below_bound, k, dist);

        let mut candidate_set = reachable_below_bound;
        for p in pivots {
            if !candidate_set.contains(&p) {
                candidate_set.push(p);
            }
        }

        if candidate_set.is_empty() {
            continue;
        }

        let blocks = partition_blocks(&candidate_set, dist, t, frame.bound);

        for block in blocks.into_iter().rev() {
            stack.push(Frame {
                u: block.vertices,
                s: block.frontier,
                bound: block.upper_bound,
            });
        }
    }
}

fn run(graph: &Graph, source: usize, bound: f64) -> Result<(Vec<f64>, Vec<Option<usize>>)> {
    let n = graph.vertex_count();
    if source >= n {
        return Err(Error::SourceNotFound);
    }

    let mut dist = vec![INF; n];
    let mut parent = vec![None; n];
    dist[source] = 0.0;

    log::debug!("sssp: n={} source={} bound={}", n, source, bound);

    let universe: Vec<usize> = (0..n).collect();
    recursive_layer(graph, &mut dist, &mut parent, universe, vec![source], bound);

    Ok((dist, parent))
}

/// Distances from `source` to every vertex, `INF` for unreachable vertices.
pub fn sssp(graph: &Graph, source: usize) -> Result<Vec<f64>> {
    Ok(run(graph, source, INF)?.0)
}

/// Distances and predecessor vector from `source`. `parent[source]` and
/// `parent[v]` for unreachable `v` are `None`, matching the 0-sentinel
/// spec §3 describes under the 0-based indexing this crate uses throughout.
pub fn sssp_with_parents(graph: &Graph, source: usize) -> Result<(Vec<f64>, Vec<Option<usize>>)> {
    run(graph, source, INF)
}

/// Like [`sssp`], but any relaxation that would exceed `max_distance` is
/// discarded, leaving the affected vertices at `INF`.
pub fn sssp_bounded(graph: &Graph, source: usize, max_distance: f64) -> Result<Vec<f64>> {
    Ok(run(graph, source, max_distance)?.0)
}

/// Summary diagnostics for an SSSP run, mirroring the external-interface
/// contract of spec §6.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SsspStatistics {
    pub n_vertices: usize,
    pub m_edges: usize,
    pub source: usize,
    pub pivot_threshold: usize,
    pub partition_parameter: u32,
    pub runtime_seconds: f64,
    pub distances_computed: usize,
    pub unreachable: usize,
    pub max_distance: f64,
    pub avg_distance: f64,
}

/// Runs [`sssp`] and reports timing plus distance-distribution summaries.
pub fn sssp_statistics(graph: &Graph, source: usize) -> Result<SsspStatistics> {
    let started = Instant::now();
    let (dist, _) = run(graph, source, INF)?;
    let runtime_seconds = started.elapsed().as_secs_f64();

    let n = graph.vertex_count();
    let finite: Vec<f64> = dist.iter().copied().filter(|d| d.is_finite()).collect();
    let unreachable = n - finite.len();
    let max_distance = finite.iter().copied().fold(0.0_f64, f64::max);
    let avg_distance = if finite.is_empty() {
        0.0
    } else {
        finite.iter().sum::<f64>() / finite.len() as f64
    };

    Ok(SsspStatistics {
        n_vertices: n,
        m_edges: graph.edge_count(),
        source,
        pivot_threshold: pivot_threshold(n),
        partition_parameter: partition_parameter(n),
        runtime_seconds,
        distances_computed: finite.len(),
        unreachable,
        max_distance,
        avg_distance,
    })
}

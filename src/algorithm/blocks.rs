//! Block partitioning (spec §4.3.5): splitting a vertex set into distance-
//! ordered chunks, each recursed on independently with its own bound.

use crate::EPSILON_BLOCK_BOUND;

/// A contiguous (by distance) slice of vertices, its singleton seed frontier,
/// and the bound the recursive layer should use when processing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub vertices: Vec<usize>,
    pub frontier: Vec<usize>,
    pub upper_bound: f64,
}

/// Partitions `vertices` into at most `min(2^t, |vertices|)` blocks.
///
/// Sorts ascending by `dist`, then distributes the remainder of
/// `|vertices| / num_blocks` across the first `|vertices| mod num_blocks`
/// blocks so sizes differ by at most one. Each block's frontier is its
/// single minimum-distance vertex and its `upper_bound` is the block's
/// maximum distance plus [`EPSILON_BLOCK_BOUND`], capped at `bound`.
pub fn partition_blocks(vertices: &[usize], dist: &[f64], t: u32, bound: f64) -> Vec<Block> {
    if vertices.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<usize> = vertices.to_vec();
    sorted.sort_by(|&a, &b| dist[a].partial_cmp(&dist[b]).unwrap());

    let num_blocks = (2usize.saturating_pow(t)).min(sorted.len()).max(1);
    let base_size = sorted.len() / num_blocks;
    let remainder = sorted.len() % num_blocks;

    log::debug!(
        "partition_blocks: vertices={} t={} -> num_blocks={}",
        sorted.len(),
        t,
        num_blocks
    );

    let mut blocks = Vec::with_capacity(num_blocks);
    let mut start = 0;
    for i in 0..num_blocks {
        let size = base_size + if i < remainder { 1 } else { 0 };
        if size == 0 {
            continue;
        }
        let chunk = &sorted[start..start + size];
        start += size;

        let seed = chunk[0];
        let max_dist = chunk
            .iter()
            .map(|&v| dist[v])
            .fold(f64::NEG_INFINITY, f64::max);
        let upper_bound = (max_dist + EPSILON_BLOCK_BOUND).min(bound);

        blocks.push(Block {
            vertices: chunk.to_vec(),
            frontier: vec![seed],
            upper_bound,
        });
    }

    blocks
}

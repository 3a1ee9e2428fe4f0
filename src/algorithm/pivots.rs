//! Pivot selection (spec §4.3.4): picking a bounded-size representative
//! subset of the filtered candidate set to seed the next recursive layer.

/// Selects `P ⊆ candidates` with `|P| ≤ max(1, ⌊|candidates| / k⌋)`.
///
/// `candidates` are vertex ids already filtered to the "below bound, not in
/// the current frontier" set (`Ũ` in the recursive layer's own bookkeeping).
/// Sorts ascending by `dist`, then if `|candidates| ≤ k` returns all of them;
/// otherwise walks the sorted sequence at a uniform stride. The sort is
/// stable, so vertices tied on distance keep their input relative order.
pub fn select_pivots(candidates: &[usize], k: usize, dist: &[f64]) -> Vec<usize> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<usize> = candidates.to_vec();
    sorted.sort_by(|&a, &b| dist[a].partial_cmp(&dist[b]).unwrap());

    if sorted.len() <= k.max(1) {
        log::trace!(
            "select_pivots: candidates={} <= k={}, returning all as pivots",
            sorted.len(),
            k
        );
        return sorted;
    }

    let target = (sorted.len() / k).max(1);
    let step = (sorted.len() / target).max(1);

    let mut pivots = Vec::with_capacity(target);
    let mut idx = 0;
    while idx < sorted.len() && pivots.len() < target {
        pivots.push(sorted[idx]);
        idx += step;
    }
    log::debug!(
        "select_pivots: candidates={} k={} -> pivots={}",
        sorted.len(),
        k,
        pivots.len()
    );
    pivots
}

/// Scores each candidate as `dist[v] - 0.1 * out_degree(v)`, biasing toward
/// low-distance, high-degree vertices, then applies the same uniform-stride
/// selection as [`select_pivots`]. Both variants obey the same `|P|` ceiling.
pub fn select_pivots_by_degree(
    candidates: &[usize],
    k: usize,
    dist: &[f64],
    out_degree: impl Fn(usize) -> usize,
) -> Vec<usize> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let score = |v: usize| dist[v] - 0.1 * out_degree(v) as f64;

    let mut sorted: Vec<usize> = candidates.to_vec();
    sorted.sort_by(|&a, &b| score(a).partial_cmp(&score(b)).unwrap());

    if sorted.len() <= k.max(1) {
        return sorted;
    }

    let target = (sorted.len() / k).max(1);
    let step = (sorted.len() / target).max(1);

    let mut pivots = Vec::with_capacity(target);
    let mut idx = 0;
    while idx < sorted.len() && pivots.len() < target {
        pivots.push(sorted[idx]);
        idx += step;
    }
    pivots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_all_when_below_threshold() {
        let dist = vec![0.0, 1.0, 2.0, 3.0];
        let candidates = vec![1, 2, 3];
        let pivots = select_pivots(&candidates, 10, &dist);
        assert_eq!(pivots, vec![1, 2, 3]);
    }

    #[test]
    fn respects_ceiling_when_above_threshold() {
        let dist: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let candidates: Vec<usize> = (0..20).collect();
        let k = 4;
        let pivots = select_pivots(&candidates, k, &dist);
        let ceiling = (candidates.len() / k).max(1);
        assert!(pivots.len() <= ceiling);
        assert!(pivots.iter().all(|v| candidates.contains(v)));
        let unique: std::collections::HashSet<_> = pivots.iter().collect();
        assert_eq!(unique.len(), pivots.len());
    }

    #[test]
    fn empty_candidates_yield_empty_pivots() {
        let dist = vec![0.0];
        assert!(select_pivots(&[], 3, &dist).is_empty());
    }
}

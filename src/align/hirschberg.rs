//! Hirschberg's divide-and-conquer alignment.
//!
//! Each divide step halves the first sequence, runs one forward and one
//! backward cost sweep against the whole second sequence, and picks the
//! column where an optimal path crosses the middle row. Both halves are then
//! solved recursively and concatenated. Sub-problems where either side has
//! fewer than two symbols go to [`full::align`].

use tracing::{debug, trace};

use crate::align::full;
use crate::align::scanner::{sweep, DpRow};
use crate::align::stats::AlignmentStats;
use crate::core::alignment::AlignmentResult;
use crate::core::cost_model::{CostModel, CostModelError};
use crate::core::sequence::{Forward, Reversed};
use crate::core::types::Cost;

/// Optimal global alignment of `x` against `y` in linear space.
///
/// # Errors
///
/// Returns `CostModelError::UndefinedSymbol` for the first symbol the model
/// cannot cost. No partial alignment is returned.
pub fn hirschberg(
    x: &[u8],
    y: &[u8],
    model: &CostModel,
) -> Result<AlignmentResult, CostModelError> {
    hirschberg_with_stats(x, y, model).map(|(result, _)| result)
}

/// Like [`hirschberg`], also returning work and memory counters.
///
/// # Errors
///
/// Returns `CostModelError::UndefinedSymbol` for the first symbol the model
/// cannot cost.
pub fn hirschberg_with_stats(
    x: &[u8],
    y: &[u8],
    model: &CostModel,
) -> Result<(AlignmentResult, AlignmentStats), CostModelError> {
    let mut stats = AlignmentStats::default();
    let result = recurse(x, y, model, 0, &mut stats)?;

    debug!(
        n = x.len(),
        m = y.len(),
        cost = result.cost,
        sweeps = stats.sweeps,
        base_cases = stats.base_cases,
        max_depth = stats.max_depth,
        "hirschberg alignment finished"
    );

    Ok((result, stats))
}

fn recurse(
    x: &[u8],
    y: &[u8],
    model: &CostModel,
    depth: usize,
    stats: &mut AlignmentStats,
) -> Result<AlignmentResult, CostModelError> {
    let n = x.len();
    let m = y.len();

    if n < 2 || m < 2 {
        stats.record_base_case(n, m, depth);
        return full::align(x, y, model);
    }
    stats.record_depth(depth);

    let (x_left, x_right) = x.split_at(n / 2);
    let cut = split_column(x_left, x_right, y, model, stats)?;
    trace!(depth, n, m, mid = n / 2, cut, "split");

    let mut left = recurse(x_left, &y[..cut], model, depth + 1, stats)?;
    let right = recurse(x_right, &y[cut..], model, depth + 1, stats)?;
    left.append(right);
    Ok(left)
}

/// Column of `y` where an optimal path crosses the row between `x_left`
/// and `x_right`.
///
/// The cost rows are dropped when this returns, before the caller recurses.
fn split_column(
    x_left: &[u8],
    x_right: &[u8],
    y: &[u8],
    model: &CostModel,
    stats: &mut AlignmentStats,
) -> Result<usize, CostModelError> {
    let forward = sweep(Forward(x_left), Forward(y), model, stats)?;
    let backward = sweep(Reversed(x_right), Reversed(y), model, stats)?;
    Ok(best_cut(&forward, &backward))
}

/// Smallest `j` minimising `forward[j] + backward[m - j]`.
pub(crate) fn best_cut(forward: &DpRow, backward: &DpRow) -> usize {
    debug_assert_eq!(forward.len(), backward.len());
    let m = forward.len() - 1;

    let mut best_j = 0usize;
    let mut best_val = Cost::MAX;
    for j in 0..=m {
        let v = forward[j] + backward[m - j];
        if v < best_val {
            best_val = v;
            best_j = j;
        }
    }
    best_j
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::store::CostConfig;

    fn reference() -> CostModel {
        CostConfig::embedded().unwrap().to_model().unwrap()
    }

    fn row(costs: &[Cost]) -> DpRow {
        DpRow {
            costs: costs.to_vec(),
        }
    }

    #[test]
    fn test_reference_pair() {
        let model = reference();
        let r = hirschberg(b"ATGCATGC", b"TGCAGC", &model).unwrap();
        assert_eq!(r.cost, 3);
        assert_eq!(r.aligned_a_str(), "ATGCATGC");
        assert_eq!(r.aligned_b_str(), "-TGC-AGC");
        assert_eq!(r, full::align(b"ATGCATGC", b"TGCAGC", &model).unwrap());
    }

    #[test]
    fn test_longer_pair() {
        let model = reference();
        let r = hirschberg(b"ACGTACGTTGCA", b"TTGACGCA", &model).unwrap();
        assert_eq!(r.cost, 8);
        assert_eq!(r.aligned_a_str(), "ACGTACGTTGCA");
        assert_eq!(r.aligned_b_str(), "-T-T-G-ACGCA");
    }

    #[test]
    fn test_degenerate_inputs() {
        let model = reference();
        assert_eq!(hirschberg(b"", b"", &model).unwrap(), AlignmentResult::default());

        let r = hirschberg(b"A", b"", &model).unwrap();
        assert_eq!(r.aligned_a_str(), "A");
        assert_eq!(r.aligned_b_str(), "-");
        assert_eq!(r.cost, 1);

        let r = hirschberg(b"", b"GATTACA", &model).unwrap();
        assert_eq!(r.aligned_a_str(), "-------");
        assert_eq!(r.cost, 11);
    }

    #[test]
    fn test_best_cut_prefers_smallest_column() {
        // Sums: [4, 3, 3, 5]
        let forward = row(&[0, 1, 2, 5]);
        let backward = row(&[0, 1, 2, 4]);
        assert_eq!(best_cut(&forward, &backward), 1);
    }

    #[test]
    fn test_best_cut_edges() {
        assert_eq!(best_cut(&row(&[7]), &row(&[3])), 0);
        // Sums: [9, 9, 1]
        assert_eq!(best_cut(&row(&[5, 6, 0]), &row(&[1, 3, 4])), 2);
    }

    #[test]
    fn test_undefined_symbol_aborts() {
        let model = reference();
        let err = hirschberg(b"ATGCATGC", b"TGCUGC", &model).unwrap_err();
        assert_eq!(err, CostModelError::UndefinedSymbol('U'));
    }

    #[test]
    fn test_stats_row_memory_is_bounded_by_second_sequence() {
        let model = reference();
        let x: Vec<u8> = b"ATGC".iter().copied().cycle().take(257).collect();
        let y: Vec<u8> = b"GCAT".iter().copied().cycle().take(31).collect();

        let (r, stats) = hirschberg_with_stats(&x, &y, &model).unwrap();
        assert!(r.is_alignment_of(&x, &y));
        assert_eq!(stats.sweeps % 2, 0);
        assert!(stats.sweeps > 0);
        assert_eq!(stats.peak_row_cells, 2 * (y.len() + 1));
        // Halving 257 symbols reaches single symbols after at most 9 levels.
        assert!(stats.max_depth <= 9);
        // Base cases always have a side with at most one symbol.
        assert!(stats.peak_base_cells <= 2 * (x.len() + 1));
    }

    #[test]
    fn test_matches_full_cost_under_unit_model() {
        let model = CostModel::unit(b"ACGT").unwrap();
        let x = b"GATTACAGATTACA";
        let y = b"GCATGCTTTAG";
        let h = hirschberg(x, y, &model).unwrap();
        let f = full::align(x, y, &model).unwrap();
        assert_eq!(h.cost, f.cost);
        assert!(h.is_alignment_of(x, y));
        assert_eq!(h.column_cost(&model), Ok(h.cost));
    }
}

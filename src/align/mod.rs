//! Alignment algorithms.
//!
//! - [`full`]: quadratic-space Needleman–Wunsch with traceback (base case and
//!   reference baseline)
//! - [`scanner`]: linear-space forward and backward cost sweeps
//! - [`hirschberg`]: the divide-and-conquer driver
//! - [`stats`]: counters describing the work an alignment did
//!
//! ## Tie-breaking
//!
//! Several alignments can share the optimal cost. Which one is reported is
//! fixed: the traceback prefers diagonal, then up, then left steps, and the
//! divide step picks the smallest optimal split column.

pub mod full;
pub mod hirschberg;
pub mod scanner;
pub mod stats;

use crate::core::alignment::AlignmentResult;
use crate::core::cost_model::{CostModel, CostModelError};
use crate::core::types::AlignMethod;

pub use stats::AlignmentStats;

/// Align `x` against `y` with the chosen method.
///
/// Stats are only collected by the linear-space method; the full aligner
/// reports a single base case covering the whole matrix.
///
/// # Errors
///
/// Returns `CostModelError::UndefinedSymbol` for the first symbol the model
/// cannot cost.
pub fn align_with(
    method: AlignMethod,
    x: &[u8],
    y: &[u8],
    model: &CostModel,
) -> Result<(AlignmentResult, AlignmentStats), CostModelError> {
    match method {
        AlignMethod::Hirschberg => hirschberg::hirschberg_with_stats(x, y, model),
        AlignMethod::Full => {
            let result = full::align(x, y, model)?;
            let mut stats = AlignmentStats::default();
            stats.record_base_case(x.len(), y.len(), 0);
            Ok((result, stats))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_agree_on_cost() {
        let model = CostModel::unit(b"ACGT").unwrap();
        let (h, h_stats) = align_with(AlignMethod::Hirschberg, b"ACCGTTA", b"CGTAA", &model).unwrap();
        let (f, f_stats) = align_with(AlignMethod::Full, b"ACCGTTA", b"CGTAA", &model).unwrap();

        assert_eq!(h.cost, f.cost);
        assert!(h_stats.sweeps > 0);
        assert_eq!(f_stats.sweeps, 0);
        assert_eq!(f_stats.base_cases, 1);
        assert_eq!(f_stats.peak_base_cells, 8 * 6);
    }
}

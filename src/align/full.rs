//! Quadratic-space Needleman–Wunsch with full traceback.
//!
//! Used as the base case of the Hirschberg recursion and as the reference
//! baseline for small inputs.

use tracing::trace;

use crate::core::alignment::AlignmentResult;
use crate::core::cost_model::{CostModel, CostModelError};
use crate::core::types::{Cost, GAP};

/// Align `x` against `y`, keeping the whole `(n+1) x (m+1)` cost matrix.
///
/// The traceback walks from `(n, m)` back to the origin and, on exact ties,
/// prefers the diagonal step, then the step consuming a symbol of `x`
/// against a gap ("up"), then the step consuming a symbol of `y` ("left").
///
/// # Errors
///
/// Returns `CostModelError::UndefinedSymbol` for the first symbol the model
/// cannot cost.
pub fn align(x: &[u8], y: &[u8], model: &CostModel) -> Result<AlignmentResult, CostModelError> {
    let n = x.len();
    let m = y.len();
    let width = m + 1;
    trace!(n, m, "full alignment");

    let mut dp: Vec<Cost> = vec![0; (n + 1) * width];

    for j in 1..=m {
        dp[j] = dp[j - 1] + model.gap_cost(y[j - 1])?;
    }
    for i in 1..=n {
        dp[i * width] = dp[(i - 1) * width] + model.gap_cost(x[i - 1])?;
    }

    for i in 1..=n {
        let gap_x = model.gap_cost(x[i - 1])?;
        for j in 1..=m {
            let diag = dp[(i - 1) * width + j - 1] + model.substitution_cost(x[i - 1], y[j - 1])?;
            let up = dp[(i - 1) * width + j] + gap_x;
            let left = dp[i * width + j - 1] + model.gap_cost(y[j - 1])?;
            dp[i * width + j] = diag.min(up).min(left);
        }
    }

    // Backtrack
    let mut rev = AlignmentResult::with_capacity(n + m);
    let mut i = n;
    let mut j = m;

    while i > 0 && j > 0 {
        let score = dp[i * width + j];
        if score == dp[(i - 1) * width + j - 1] + model.substitution_cost(x[i - 1], y[j - 1])? {
            rev.push_column(x[i - 1], y[j - 1]);
            i -= 1;
            j -= 1;
        } else if score == dp[(i - 1) * width + j] + model.gap_cost(x[i - 1])? {
            rev.push_column(x[i - 1], GAP);
            i -= 1;
        } else {
            debug_assert_eq!(score, dp[i * width + j - 1] + model.gap_cost(y[j - 1])?);
            rev.push_column(GAP, y[j - 1]);
            j -= 1;
        }
    }
    while i > 0 {
        rev.push_column(x[i - 1], GAP);
        i -= 1;
    }
    while j > 0 {
        rev.push_column(GAP, y[j - 1]);
        j -= 1;
    }

    rev.aligned_a.reverse();
    rev.aligned_b.reverse();
    rev.cost = dp[n * width + m];
    Ok(rev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::store::CostConfig;

    fn reference() -> CostModel {
        CostConfig::embedded().unwrap().to_model().unwrap()
    }

    #[test]
    fn test_reference_pair() {
        let r = align(b"ATGCATGC", b"TGCAGC", &reference()).unwrap();
        assert_eq!(r.cost, 3);
        assert_eq!(r.aligned_a_str(), "ATGCATGC");
        assert_eq!(r.aligned_b_str(), "-TGC-AGC");
    }

    #[test]
    fn test_empty_inputs() {
        let model = reference();
        assert_eq!(align(b"", b"", &model).unwrap(), AlignmentResult::default());

        let r = align(b"A", b"", &model).unwrap();
        assert_eq!(r.aligned_a_str(), "A");
        assert_eq!(r.aligned_b_str(), "-");
        assert_eq!(r.cost, 1);

        let r = align(b"", b"TG", &model).unwrap();
        assert_eq!(r.aligned_a_str(), "--");
        assert_eq!(r.aligned_b_str(), "TG");
        assert_eq!(r.cost, 3);
    }

    #[test]
    fn test_diagonal_preferred_on_tie() {
        // A/C costs 2 and so does the deletion + insertion detour.
        let model = CostModel::from_fn(b"AC", |_| 1, |a, b| if a == b { 0 } else { 2 }).unwrap();
        let r = align(b"A", b"C", &model).unwrap();
        assert_eq!(r.cost, 2);
        assert_eq!(r.aligned_a_str(), "A");
        assert_eq!(r.aligned_b_str(), "C");
    }

    #[test]
    fn test_up_preferred_over_left_on_tie() {
        // Substitutions are too expensive, so A and C are both gapped. The
        // traceback at (1, 1) takes "up" first, which puts the gapped A last.
        let model = CostModel::from_fn(b"AC", |_| 1, |a, b| if a == b { 0 } else { 5 }).unwrap();
        let r = align(b"A", b"C", &model).unwrap();
        assert_eq!(r.cost, 2);
        assert_eq!(r.aligned_a_str(), "-A");
        assert_eq!(r.aligned_b_str(), "C-");
    }

    #[test]
    fn test_undefined_symbol() {
        let err = align(b"ATN", b"AT", &reference()).unwrap_err();
        assert_eq!(err, CostModelError::UndefinedSymbol('N'));
    }

    #[test]
    fn test_asymmetric_costs() {
        // Matching C against itself is not free here.
        let model = CostModel::from_fn(
            b"AC",
            |_| 2,
            |a, b| match (a, b) {
                (b'A', b'A') => 0,
                (b'C', b'C') => 5,
                _ => 1,
            },
        )
        .unwrap();
        let r = align(b"CC", b"CC", &model).unwrap();
        assert_eq!(r.cost, 8);
        assert!(r.is_alignment_of(b"CC", b"CC"));
        assert_eq!(r.column_cost(&model), Ok(8));
    }
}

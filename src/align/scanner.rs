//! Linear-space cost sweeps.
//!
//! Both sweeps run the same recurrence as [`crate::align::full::align`] but keep
//! only two rows alive, so they return the last row of costs and nothing
//! else. The backward sweep reads both inputs through [`Reversed`] views.

use std::ops::Index;

use crate::align::stats::AlignmentStats;
use crate::core::cost_model::{CostModel, CostModelError};
use crate::core::sequence::{Forward, Reversed, SymbolView};
use crate::core::types::Cost;

/// One row of accumulated DP costs, `m + 1` entries for a second sequence of
/// length `m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpRow {
    pub costs: Vec<Cost>,
}

impl DpRow {
    #[must_use]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Cost] {
        &self.costs
    }
}

impl Index<usize> for DpRow {
    type Output = Cost;

    fn index(&self, j: usize) -> &Cost {
        &self.costs[j]
    }
}

/// Last row of the DP for `x` against `y`.
///
/// Entry `j` is the optimal cost of aligning all of `x` with `y[..j]`.
///
/// # Errors
///
/// Returns `CostModelError::UndefinedSymbol` for the first symbol the model
/// cannot cost.
pub fn forward_costs(x: &[u8], y: &[u8], model: &CostModel) -> Result<DpRow, CostModelError> {
    sweep(Forward(x), Forward(y), model, &mut AlignmentStats::default())
}

/// Last row of the DP for `x` reversed against `y` reversed.
///
/// Entry `j` is the optimal cost of aligning all of `x` with the last `j`
/// symbols of `y`.
///
/// # Errors
///
/// Returns `CostModelError::UndefinedSymbol` for the first symbol the model
/// cannot cost.
pub fn backward_costs(x: &[u8], y: &[u8], model: &CostModel) -> Result<DpRow, CostModelError> {
    sweep(Reversed(x), Reversed(y), model, &mut AlignmentStats::default())
}

/// Run the recurrence over two views with a pair of row buffers.
pub(crate) fn sweep<X: SymbolView, Y: SymbolView>(
    x: X,
    y: Y,
    model: &CostModel,
    stats: &mut AlignmentStats,
) -> Result<DpRow, CostModelError> {
    let m = y.len();
    let mut prev: Vec<Cost> = Vec::with_capacity(m + 1);
    let mut curr: Vec<Cost> = vec![0; m + 1];

    // row 0
    prev.push(0);
    for j in 1..=m {
        prev.push(prev[j - 1] + model.gap_cost(y.at(j - 1))?);
    }

    for i in 0..x.len() {
        let cx = x.at(i);
        let gap_x = model.gap_cost(cx)?;
        curr[0] = prev[0] + gap_x;
        for j in 1..=m {
            let cy = y.at(j - 1);
            let diag = prev[j - 1] + model.substitution_cost(cx, cy)?;
            let up = prev[j] + gap_x;
            let left = curr[j - 1] + model.gap_cost(cy)?;
            curr[j] = diag.min(up).min(left);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    stats.record_sweep(prev.len() + curr.len());
    Ok(DpRow { costs: prev })
}

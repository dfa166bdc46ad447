use serde::Serialize;

use crate::core::cost_model::{CostModel, CostModelError};
use crate::core::types::{ColumnKind, Cost, GAP};

/// A global alignment of two sequences and its total cost.
///
/// `aligned_a` and `aligned_b` always have the same length. Column `i` pairs
/// `aligned_a[i]` with `aligned_b[i]`; either side may be [`GAP`], never both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlignmentResult {
    pub aligned_a: Vec<u8>,
    pub aligned_b: Vec<u8>,
    pub cost: Cost,
}

/// Per-kind column counts of an alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ColumnCounts {
    pub identities: usize,
    pub substitutions: usize,
    pub deletions: usize,
    pub insertions: usize,
}

impl ColumnCounts {
    /// Fraction of columns that are identities (0.0 for an empty alignment)
    #[must_use]
    pub fn identity_fraction(&self) -> f64 {
        let total = self.identities + self.substitutions + self.deletions + self.insertions;
        if total == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                self.identities as f64 / total as f64
            }
        }
    }
}

impl AlignmentResult {
    /// Empty alignment with room for `columns` columns
    #[must_use]
    pub fn with_capacity(columns: usize) -> Self {
        Self {
            aligned_a: Vec::with_capacity(columns),
            aligned_b: Vec::with_capacity(columns),
            cost: 0,
        }
    }

    /// Number of columns
    #[must_use]
    pub fn len(&self) -> usize {
        self.aligned_a.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    pub(crate) fn push_column(&mut self, a: u8, b: u8) {
        self.aligned_a.push(a);
        self.aligned_b.push(b);
    }

    /// Concatenate `right` after `self`, summing the costs.
    pub fn append(&mut self, mut right: AlignmentResult) {
        self.aligned_a.append(&mut right.aligned_a);
        self.aligned_b.append(&mut right.aligned_b);
        self.cost += right.cost;
    }

    /// Iterate over `(a, b)` column pairs
    pub fn columns(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.aligned_a
            .iter()
            .copied()
            .zip(self.aligned_b.iter().copied())
    }

    /// First aligned row with gaps removed
    #[must_use]
    pub fn ungapped_a(&self) -> Vec<u8> {
        self.aligned_a.iter().copied().filter(|&s| s != GAP).collect()
    }

    /// Second aligned row with gaps removed
    #[must_use]
    pub fn ungapped_b(&self) -> Vec<u8> {
        self.aligned_b.iter().copied().filter(|&s| s != GAP).collect()
    }

    /// Check that this is a well-formed alignment of `x` against `y`.
    #[must_use]
    pub fn is_alignment_of(&self, x: &[u8], y: &[u8]) -> bool {
        self.aligned_a.len() == self.aligned_b.len()
            && self.columns().all(|(a, b)| ColumnKind::of(a, b).is_some())
            && self.ungapped_a() == x
            && self.ungapped_b() == y
    }

    /// Sum the column costs under `model`.
    ///
    /// For an alignment produced with `model` this equals `self.cost`.
    ///
    /// # Errors
    ///
    /// Returns `CostModelError::UndefinedSymbol` if a column holds a symbol
    /// outside the model's alphabet.
    pub fn column_cost(&self, model: &CostModel) -> Result<Cost, CostModelError> {
        self.columns().try_fold(0, |acc, (a, b)| {
            let c = match (a == GAP, b == GAP) {
                (false, false) => model.substitution_cost(a, b)?,
                (false, true) => model.gap_cost(a)?,
                (true, false) => model.gap_cost(b)?,
                (true, true) => 0,
            };
            Ok(acc + c)
        })
    }

    /// The same alignment with the two rows exchanged
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            aligned_a: self.aligned_b.clone(),
            aligned_b: self.aligned_a.clone(),
            cost: self.cost,
        }
    }

    #[must_use]
    pub fn counts(&self) -> ColumnCounts {
        let mut counts = ColumnCounts::default();
        for kind in self.columns().filter_map(|(a, b)| ColumnKind::of(a, b)) {
            match kind {
                ColumnKind::Identity => counts.identities += 1,
                ColumnKind::Substitution => counts.substitutions += 1,
                ColumnKind::Deletion => counts.deletions += 1,
                ColumnKind::Insertion => counts.insertions += 1,
            }
        }
        counts
    }

    /// Line drawn between the two rows when displaying the alignment
    #[must_use]
    pub fn marker_line(&self) -> String {
        self.columns()
            .map(|(a, b)| ColumnKind::of(a, b).map_or(' ', ColumnKind::marker))
            .collect()
    }

    #[must_use]
    pub fn aligned_a_str(&self) -> String {
        String::from_utf8_lossy(&self.aligned_a).into_owned()
    }

    #[must_use]
    pub fn aligned_b_str(&self) -> String {
        String::from_utf8_lossy(&self.aligned_b).into_owned()
    }
}

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::types::{Cost, GAP};

/// Rank value marking a byte that is not part of the alphabet
const NO_RANK: u8 = u8::MAX;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CostModelError {
    #[error("Undefined symbol {0:?}: not covered by the cost model")]
    UndefinedSymbol(char),

    #[error("Cost model alphabet is empty")]
    EmptyAlphabet,

    #[error("The gap marker {0:?} cannot be an alphabet symbol")]
    GapInAlphabet(char),

    #[error("Missing substitution cost for ({0:?}, {1:?})")]
    MissingSubstitution(char, char),

    #[error("Substitution table mentions {0:?}, which has no gap cost")]
    UnknownSubstitutionSymbol(char),
}

/// Substitution and gap costs over a byte alphabet.
///
/// Both tables are total over the alphabet. Lookups for a byte outside the
/// alphabet fail with [`CostModelError::UndefinedSymbol`]. Costs need not be
/// symmetric, and aligning a symbol with itself need not be free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostModel {
    /// Alphabet in rank order
    symbols: Vec<u8>,

    /// Byte -> rank in `symbols`, or `NO_RANK`
    rank: [u8; 256],

    /// Gap cost per rank
    gap: Vec<Cost>,

    /// Row-major `k x k` substitution costs, indexed by (rank of a, rank of b)
    substitution: Vec<Cost>,
}

impl CostModel {
    /// Build a model from a gap table and a nested substitution table.
    ///
    /// The alphabet is the key set of `gap`. Every ordered pair over the
    /// alphabet must have a substitution cost.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is empty, contains the gap marker,
    /// a substitution entry is missing, or the substitution table names a
    /// symbol without a gap cost.
    pub fn from_tables(
        gap: &BTreeMap<u8, Cost>,
        substitution: &BTreeMap<u8, BTreeMap<u8, Cost>>,
    ) -> Result<Self, CostModelError> {
        for (&a, row) in substitution {
            if !gap.contains_key(&a) {
                return Err(CostModelError::UnknownSubstitutionSymbol(char::from(a)));
            }
            if let Some(&b) = row.keys().find(|b| !gap.contains_key(b)) {
                return Err(CostModelError::UnknownSubstitutionSymbol(char::from(b)));
            }
        }

        let alphabet: Vec<u8> = gap.keys().copied().collect();
        Self::build(&alphabet, |s| Ok(gap[&s]), |a, b| {
            substitution
                .get(&a)
                .and_then(|row| row.get(&b))
                .copied()
                .ok_or(CostModelError::MissingSubstitution(char::from(a), char::from(b)))
        })
    }

    /// Build a model by evaluating cost functions over `alphabet`.
    ///
    /// Duplicate symbols in `alphabet` are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is empty or contains the gap marker.
    pub fn from_fn(
        alphabet: &[u8],
        gap: impl Fn(u8) -> Cost,
        substitution: impl Fn(u8, u8) -> Cost,
    ) -> Result<Self, CostModelError> {
        Self::build(alphabet, |s| Ok(gap(s)), |a, b| Ok(substitution(a, b)))
    }

    /// Edit-distance costs: free identity, unit mismatch, unit gap.
    ///
    /// # Errors
    ///
    /// Returns an error if the alphabet is empty or contains the gap marker.
    pub fn unit(alphabet: &[u8]) -> Result<Self, CostModelError> {
        Self::from_fn(alphabet, |_| 1, |a, b| Cost::from(a != b))
    }

    fn build(
        alphabet: &[u8],
        gap: impl Fn(u8) -> Result<Cost, CostModelError>,
        substitution: impl Fn(u8, u8) -> Result<Cost, CostModelError>,
    ) -> Result<Self, CostModelError> {
        let mut symbols: Vec<u8> = Vec::with_capacity(alphabet.len());
        let mut rank = [NO_RANK; 256];
        for &s in alphabet {
            if s == GAP {
                return Err(CostModelError::GapInAlphabet(char::from(GAP)));
            }
            if rank[usize::from(s)] == NO_RANK {
                // At most 255 distinct non-gap bytes, so ranks stay below NO_RANK.
                rank[usize::from(s)] = symbols.len() as u8;
                symbols.push(s);
            }
        }
        if symbols.is_empty() {
            return Err(CostModelError::EmptyAlphabet);
        }

        let gap = symbols.iter().map(|&s| gap(s)).collect::<Result<Vec<_>, _>>()?;
        let mut table = Vec::with_capacity(symbols.len() * symbols.len());
        for &a in &symbols {
            for &b in &symbols {
                table.push(substitution(a, b)?);
            }
        }

        Ok(Self {
            symbols,
            rank,
            gap,
            substitution: table,
        })
    }

    #[inline]
    fn rank_of(&self, symbol: u8) -> Result<usize, CostModelError> {
        match self.rank[usize::from(symbol)] {
            NO_RANK => Err(CostModelError::UndefinedSymbol(char::from(symbol))),
            r => Ok(usize::from(r)),
        }
    }

    /// Cost of aligning `a` (first sequence) against `b` (second sequence).
    ///
    /// # Errors
    ///
    /// Returns `CostModelError::UndefinedSymbol` if either symbol is outside
    /// the alphabet.
    #[inline]
    pub fn substitution_cost(&self, a: u8, b: u8) -> Result<Cost, CostModelError> {
        let k = self.symbols.len();
        Ok(self.substitution[self.rank_of(a)? * k + self.rank_of(b)?])
    }

    /// Cost of aligning `symbol` against a gap.
    ///
    /// # Errors
    ///
    /// Returns `CostModelError::UndefinedSymbol` if the symbol is outside
    /// the alphabet.
    #[inline]
    pub fn gap_cost(&self, symbol: u8) -> Result<Cost, CostModelError> {
        Ok(self.gap[self.rank_of(symbol)?])
    }

    /// Alphabet symbols in rank order
    #[must_use]
    pub fn alphabet(&self) -> &[u8] {
        &self.symbols
    }

    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.rank[usize::from(symbol)] != NO_RANK
    }

    /// Position and value of the first symbol of `seq` outside the alphabet
    #[must_use]
    pub fn first_undefined(&self, seq: &[u8]) -> Option<(usize, u8)> {
        seq.iter()
            .enumerate()
            .find(|(_, &s)| !self.contains(s))
            .map(|(i, &s)| (i, s))
    }

    /// Same gap costs with the substitution table transposed.
    ///
    /// Aligning `(y, x)` under the transposed model mirrors aligning `(x, y)`
    /// under this one.
    #[must_use]
    pub fn transposed(&self) -> Self {
        let k = self.symbols.len();
        let mut substitution = vec![0; k * k];
        for a in 0..k {
            for b in 0..k {
                substitution[b * k + a] = self.substitution[a * k + b];
            }
        }
        Self {
            substitution,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        *self == self.transposed()
    }

    /// Gap table keyed by symbol
    #[must_use]
    pub fn gap_table(&self) -> BTreeMap<u8, Cost> {
        self.symbols
            .iter()
            .zip(&self.gap)
            .map(|(&s, &c)| (s, c))
            .collect()
    }

    /// Substitution table keyed by (first symbol, second symbol)
    #[must_use]
    pub fn substitution_table(&self) -> BTreeMap<u8, BTreeMap<u8, Cost>> {
        let k = self.symbols.len();
        self.symbols
            .iter()
            .enumerate()
            .map(|(ra, &a)| {
                let row = self
                    .symbols
                    .iter()
                    .enumerate()
                    .map(|(rb, &b)| (b, self.substitution[ra * k + rb]))
                    .collect();
                (a, row)
            })
            .collect()
    }
}

use serde::{Deserialize, Serialize};

/// Accumulated alignment cost.
///
/// Integer costs keep the traceback's equality checks exact.
pub type Cost = i64;

/// Marker emitted in an aligned sequence where the other sequence has a symbol.
pub const GAP: u8 = b'-';

/// Algorithm used to compute an alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AlignMethod {
    /// Linear-space divide and conquer
    #[default]
    Hirschberg,
    /// Quadratic-space Needleman-Wunsch with full traceback
    Full,
}

impl std::fmt::Display for AlignMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hirschberg => write!(f, "hirschberg"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// Kind of a single alignment column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Same symbol on both rows
    Identity,
    /// Two different symbols
    Substitution,
    /// Symbol of the first sequence against a gap
    Deletion,
    /// Symbol of the second sequence against a gap
    Insertion,
}

impl ColumnKind {
    /// Classify a column. Returns `None` for a gap/gap column, which never
    /// appears in a valid alignment.
    #[must_use]
    pub fn of(a: u8, b: u8) -> Option<Self> {
        match (a == GAP, b == GAP) {
            (false, false) if a == b => Some(Self::Identity),
            (false, false) => Some(Self::Substitution),
            (false, true) => Some(Self::Deletion),
            (true, false) => Some(Self::Insertion),
            (true, true) => None,
        }
    }

    /// Character used on the marker line between the two aligned rows
    #[must_use]
    pub fn marker(self) -> char {
        match self {
            Self::Identity => '|',
            Self::Substitution => '.',
            Self::Deletion | Self::Insertion => ' ',
        }
    }
}

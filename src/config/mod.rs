//! Cost model configuration.
//!
//! Cost tables are stored as JSON:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "name": "reference",
//!   "gap": { "A": 1, "T": 2, "G": 1, "C": 3 },
//!   "substitution": {
//!     "A": { "A": 0, "T": 1, "G": 5, "C": 1 },
//!     "T": { "A": 1, "T": 0, "G": 9, "C": 1 },
//!     "G": { "A": 5, "T": 9, "G": 0, "C": 1 },
//!     "C": { "A": 1, "T": 1, "G": 1, "C": 0 }
//!   }
//! }
//! ```
//!
//! The configuration above is embedded in the binary and used when no file is
//! given.

pub mod store;

use crate::core::cost_model::CostModel;
use store::{ConfigError, CostConfig};

/// Built-in cost tables
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CostPreset {
    /// The embedded reference configuration over A, C, G, T
    #[default]
    Reference,
    /// Edit distance over A, C, G, T, N
    Unit,
}

impl CostPreset {
    /// The configuration for this preset
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded reference configuration is invalid.
    pub fn config(self) -> Result<CostConfig, ConfigError> {
        match self {
            Self::Reference => CostConfig::embedded(),
            Self::Unit => Ok(CostConfig::from_model("unit", &CostModel::unit(b"ACGTN")?)),
        }
    }
}

//! # hirschberg-align
//!
//! Optimal global alignment of two sequences in linear space.
//!
//! Classic Needleman–Wunsch alignment fills an `n x m` table, which quickly
//! stops fitting in memory for long sequences. Hirschberg's algorithm finds the
//! same optimal cost with only `O(m)` working memory per step: it splits the
//! first sequence in half, uses a forward and a backward cost sweep to find
//! where an optimal path crosses the middle, and recurses on both halves.
//!
//! ## Features
//!
//! - **Arbitrary costs**: per-pair substitution costs and per-symbol gap costs,
//!   asymmetric tables allowed
//! - **Deterministic ties**: the same optimal alignment is reported every time
//! - **Quadratic baseline**: the full Needleman–Wunsch aligner is available for
//!   comparison
//! - **Instrumentation**: sweep counts, recursion depth and peak row memory
//!
//! ## Example
//!
//! ```rust
//! use hirschberg_align::{hirschberg, CostConfig};
//!
//! // The embedded reference cost tables over A, C, G, T
//! let model = CostConfig::embedded().unwrap().to_model().unwrap();
//!
//! let result = hirschberg(b"ATGCATGC", b"TGCAGC", &model).unwrap();
//! assert_eq!(result.cost, 3);
//! assert_eq!(result.aligned_a_str(), "ATGCATGC");
//! assert_eq!(result.aligned_b_str(), "-TGC-AGC");
//! ```
//!
//! ## Modules
//!
//! - [`align`]: Full, linear-space and divide-and-conquer aligners
//! - [`core`]: Cost model, alignment result and sequence types
//! - [`config`]: JSON cost configurations and built-in presets
//! - [`parsing`]: FASTA and raw text sequence readers
//! - [`cli`]: Command-line interface implementation

pub mod align;
pub mod cli;
pub mod config;
pub mod core;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use align::full::align as full_align;
pub use align::hirschberg::{hirschberg, hirschberg_with_stats};
pub use align::scanner::{backward_costs, forward_costs, DpRow};
pub use align::{align_with, AlignmentStats};
pub use config::store::CostConfig;
pub use core::alignment::AlignmentResult;
pub use core::cost_model::{CostModel, CostModelError};
pub use core::sequence::Sequence;
pub use core::types::*;

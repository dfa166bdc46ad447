//! Core data types for pairwise alignment.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`CostModel`](cost_model::CostModel): substitution and gap costs over a byte alphabet
//! - [`AlignmentResult`](alignment::AlignmentResult): two gapped rows and their total cost
//! - [`Sequence`](sequence::Sequence): a named input sequence, plus the
//!   [`Forward`](sequence::Forward) / [`Reversed`](sequence::Reversed) views the DP sweeps read through
//! - [`Cost`](types::Cost), [`GAP`](types::GAP), [`AlignMethod`](types::AlignMethod): shared scalar types
//!
//! ## Costs
//!
//! Costs are minimised. Tables need not be symmetric and identities need not
//! be free, but every symbol of both inputs must be in the alphabet:
//!
//! | Column        | Cost                      |
//! |---------------|---------------------------|
//! | `a` over `b`  | `substitution_cost(a, b)` |
//! | `a` over `-`  | `gap_cost(a)`             |
//! | `-` over `b`  | `gap_cost(b)`             |

pub mod alignment;
pub mod cost_model;
pub mod sequence;
pub mod types;

//! Input limits and pre-alignment checks.

pub mod validation;

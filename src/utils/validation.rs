//! Centralized validation and helper functions.

use crate::core::cost_model::CostModel;

/// Maximum number of symbols accepted in a single input sequence.
///
/// Alignment time grows with the product of the two lengths, so inputs are
/// bounded before any work starts.
pub const MAX_SEQUENCE_LENGTH: usize = 1_000_000;

/// Check if a sequence of `len` symbols exceeds the maximum allowed.
///
/// Returns an error message if it does, None if the length is acceptable.
///
/// # Example
/// ```
/// use hirschberg_align::utils::validation::{check_sequence_length, MAX_SEQUENCE_LENGTH};
///
/// assert!(check_sequence_length(10).is_none());
/// assert!(check_sequence_length(MAX_SEQUENCE_LENGTH + 1).is_some());
/// ```
#[must_use]
pub fn check_sequence_length(len: usize) -> Option<String> {
    if len > MAX_SEQUENCE_LENGTH {
        Some(format!(
            "Sequence too long: {len} symbols exceeds maximum of {MAX_SEQUENCE_LENGTH}"
        ))
    } else {
        None
    }
}

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{label}: symbol {symbol:?} at position {position} is not in the cost model alphabet ({alphabet})")]
    UndefinedSymbol {
        label: String,
        symbol: char,
        position: usize,
        alphabet: String,
    },

    #[error("{0}")]
    TooLong(String),
}

/// Check that every symbol of `symbols` can be costed by `model`.
///
/// Reports the first offending symbol with its 0-based position, so callers
/// fail before any alignment work is done.
///
/// # Errors
///
/// Returns `ValidationError::UndefinedSymbol` for the first symbol outside
/// the alphabet, or `ValidationError::TooLong` if the sequence exceeds
/// [`MAX_SEQUENCE_LENGTH`].
pub fn validate_sequence(
    label: &str,
    symbols: &[u8],
    model: &CostModel,
) -> Result<(), ValidationError> {
    if let Some(msg) = check_sequence_length(symbols.len()) {
        return Err(ValidationError::TooLong(format!("{label}: {msg}")));
    }

    match model.first_undefined(symbols) {
        Some((position, symbol)) => Err(ValidationError::UndefinedSymbol {
            label: label.to_string(),
            symbol: char::from(symbol),
            position,
            alphabet: String::from_utf8_lossy(model.alphabet()).into_owned(),
        }),
        None => Ok(()),
    }
}

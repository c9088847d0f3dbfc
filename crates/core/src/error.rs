//! Error types for bookshelf domain values
//!
//! Only data entered by the user is validated here. Records decoded from the
//! catalog file are accepted as-is and checked with [`crate::Validator`] instead.

use thiserror::Error;

/// Result type for year parsing
pub type YearResult<T> = Result<T, YearError>;

/// Reasons a year entered by the user is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearError {
    /// The input is not an integer at all
    #[error("'{input}' is not a valid year")]
    NotANumber { input: String },

    /// The input is an integer outside the accepted range
    #[error("year {year} is outside {min}..={max}")]
    OutOfRange { year: i64, min: i64, max: i64 },
}

impl YearError {
    /// Returns true if the input parsed but fell outside the range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

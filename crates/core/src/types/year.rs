//! Publication year as entered by the user

use crate::error::{YearError, YearResult};
use std::fmt;

/// Earliest accepted publication year
pub const MIN_YEAR: i64 = 1900;

/// Latest accepted publication year
pub const MAX_YEAR: i64 = 2023;

/// A publication year that passed validation
///
/// Keeps the literal text the user typed. `"01965"` is stored as `"01965"`,
/// not reformatted to `"1965"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearPublished {
    literal: String,
    year: i64,
}

impl YearPublished {
    /// Parses and range-checks a year
    ///
    /// The input must be a plain integer (optional sign, no surrounding
    /// whitespace) within `MIN_YEAR..=MAX_YEAR`.
    pub fn parse(input: &str) -> YearResult<Self> {
        let year: i64 = input.parse().map_err(|_| YearError::NotANumber {
            input: input.to_string(),
        })?;

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(YearError::OutOfRange {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }

        Ok(Self {
            literal: input.to_string(),
            year,
        })
    }

    /// Returns the text exactly as it was entered
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// Returns the numeric year
    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn into_string(self) -> String {
        self.literal
    }
}

impl fmt::Display for YearPublished {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl std::str::FromStr for YearPublished {
    type Err = YearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

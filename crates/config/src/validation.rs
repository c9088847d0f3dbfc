//! Field checks for config sections
//!
//! Each section implements [`ConfigSection`] and reports every bad field at
//! once, built from the small checks below.

use std::fmt;

/// A config field holding a value it must not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted field path, e.g. `catalog.page_size`
    pub field: String,
    pub message: String,
    /// Offending value as text, when it helps the reader
    pub value: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: None,
        }
    }

    /// Attaches the rejected value to the message
    pub fn with_value(mut self, value: impl fmt::Display) -> Self {
        self.value = Some(value.to_string());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {} (got {})", self.field, self.message, value),
            None => write!(f, "{} {}", self.field, self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A named group of settings in the config file
pub trait ConfigSection: Default {
    /// Checks every field, returning all problems found
    fn validate(&self) -> Result<(), Vec<ValidationError>>;

    /// Replaces this section's values with those of `other`
    fn merge(&mut self, other: Self);

    /// Table name in the TOML file
    fn section_name(&self) -> &'static str;
}

pub fn in_range<T>(value: T, min: T, max: T, field: &str) -> Result<(), ValidationError>
where
    T: PartialOrd + fmt::Display + Copy,
{
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(field, format!("must be between {} and {}", min, max))
            .with_value(value))
    }
}

pub fn not_empty(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(field, "must not be empty"))
    } else {
        Ok(())
    }
}

/// Keeps the failures from a set of checks
pub fn collect_errors<I>(results: I) -> Result<(), Vec<ValidationError>>
where
    I: IntoIterator<Item = Result<(), ValidationError>>,
{
    let errors: Vec<_> = results.into_iter().filter_map(Result::err).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_bounds_are_inclusive() {
        assert!(in_range(1, 1, 1000, "catalog.page_size").is_ok());
        assert!(in_range(1000, 1, 1000, "catalog.page_size").is_ok());

        let err = in_range(0, 1, 1000, "catalog.page_size").unwrap_err();
        assert_eq!(err.value.as_deref(), Some("0"));
        assert!(in_range(1001, 1, 1000, "catalog.page_size").is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("books.json", "catalog.path").is_ok());
        assert!(not_empty("", "catalog.path").is_err());
        assert!(not_empty("   ", "catalog.path").is_err());
    }

    #[test]
    fn test_collect_errors_keeps_order() {
        assert!(collect_errors([Ok(()), Ok(())]).is_ok());

        let errors = collect_errors([
            Ok(()),
            Err(ValidationError::new("a", "bad")),
            Err(ValidationError::new("b", "worse")),
        ])
        .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].field, "b");
    }

    #[test]
    fn test_display_with_and_without_value() {
        let plain = ValidationError::new("catalog.path", "must not be empty");
        assert_eq!(plain.to_string(), "catalog.path must not be empty");

        let valued = ValidationError::new("app.log_level", "is not a level").with_value("loud");
        assert_eq!(valued.to_string(), "app.log_level is not a level (got loud)");
    }
}

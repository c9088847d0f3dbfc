//! Application-level configuration section

use crate::validation::{ConfigSection, ValidationError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Log level for application logging
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(ValidationError::new(
                "app.log_level",
                "must be one of: error, warn, info, debug, trace",
            )
            .with_value(s)),
        }
    }
}

/// Application-level settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Log level for diagnostics written to stderr
    pub log_level: LogLevel,

    /// Style terminal output with colors
    pub color_output: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // Anything chattier interleaves with the interactive menu
            log_level: LogLevel::Warn,
            color_output: true,
        }
    }
}

impl ConfigSection for AppConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Ok(())
    }

    fn merge(&mut self, other: Self) {
        self.log_level = other.log_level;
        self.color_output = other.color_output;
    }

    fn section_name(&self) -> &'static str {
        "app"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_merge() {
        let mut base = AppConfig::default();
        let other = AppConfig {
            log_level: LogLevel::Debug,
            color_output: false,
        };

        base.merge(other);
        assert_eq!(base.log_level, LogLevel::Debug);
        assert!(!base.color_output);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevel::Error.to_string(), "error");
        assert_eq!(LogLevel::Info.to_string(), "info");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!(" warning ".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
    }
}

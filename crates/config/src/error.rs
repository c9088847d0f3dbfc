//! Config file errors

use crate::validation::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but holds nothing; a missing file is not an error
    #[error("Config file at {path} is empty")]
    Empty { path: PathBuf },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Refused to save settings that would not load back as valid
    #[error("Invalid configuration: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not determine the user config directory")]
    NoConfigDir,
}

/// Joins field errors into one line for display
pub fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

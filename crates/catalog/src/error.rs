//! Error types for the catalog store

use std::path::PathBuf;
use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while reading or writing the catalog file
///
/// None of these are recoverable within a session: the file is either
/// unreachable or does not hold a JSON array of books.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog file
    #[error("Failed to read catalog file at {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the catalog file
    #[error("Failed to write catalog file at {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalog file is not a JSON array of books
    #[error("Failed to parse catalog file at {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to encode the records
    #[error("Failed to serialize catalog: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Catalog path could not be resolved
    #[error("Could not resolve catalog path: {reason}")]
    PathResolutionError { reason: String },
}

impl CatalogError {
    /// Returns the file the error refers to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::ReadError { path, .. }
            | Self::WriteError { path, .. }
            | Self::ParseError { path, .. } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = CatalogError::ParseError {
            path: PathBuf::from("books.json"),
            source,
        };
        assert!(err
            .to_string()
            .starts_with("Failed to parse catalog file at books.json"));
        assert_eq!(err.path(), Some(&PathBuf::from("books.json")));
    }

    #[test]
    fn test_path_resolution_has_no_path() {
        let err = CatalogError::PathResolutionError {
            reason: "empty path".to_string(),
        };
        assert_eq!(err.to_string(), "Could not resolve catalog path: empty path");
        assert!(err.path().is_none());
    }
}

//! File persistence for the catalog
//!
//! The whole catalog lives in one JSON array. Every operation reads the full
//! array and writes the full array back:
//! - `ensure` seeds a missing file with `[]`
//! - `load` treats an empty file or a `null` document as no records
//! - `save` writes to a temporary file beside the target and renames it over
//!   the original, so a crash never leaves a truncated catalog

use crate::{CatalogError, CatalogResult};
use bookshelf_core::{file, Book, Validator};
use std::fs;
use std::path::{Path, PathBuf};

/// Contents written to a freshly created catalog file
const EMPTY_CATALOG: &str = "[]";

/// Handles catalog file persistence
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store for the given catalog file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the catalog file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the catalog file containing `[]` if it does not exist
    ///
    /// Returns Ok(true) if a new file was created, Ok(false) if one already exists.
    pub fn ensure(&self) -> CatalogResult<bool> {
        if self.path.as_os_str().is_empty() {
            return Err(CatalogError::PathResolutionError {
                reason: "catalog path is empty".to_string(),
            });
        }

        if self.path.exists() {
            log::debug!("Catalog file found at {}", self.path.display());
            return Ok(false);
        }

        self.write_atomic(EMPTY_CATALOG)?;

        log::info!("Created empty catalog at {}", self.path.display());
        Ok(true)
    }

    /// Loads every record from the catalog file
    pub fn load(&self) -> CatalogResult<Vec<Book>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| CatalogError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;

        if contents.trim().is_empty() {
            log::warn!(
                "Catalog file at {} is empty, treating it as no records",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let books: Option<Vec<Book>> =
            serde_json::from_str(&contents).map_err(|e| CatalogError::ParseError {
                path: self.path.clone(),
                source: e,
            })?;
        let books = books.unwrap_or_default();

        // Records are kept even if invalid, the file is the source of truth
        for book in &books {
            if let Err(errors) = book.validate() {
                log::warn!("Book {} has invalid fields: {}", book.id, errors.join("; "));
            }
        }

        log::debug!(
            "Loaded {} book(s) from {}",
            books.len(),
            self.path.display()
        );
        Ok(books)
    }

    /// Replaces the catalog file contents with the given records
    pub fn save(&self, books: &[Book]) -> CatalogResult<()> {
        let json = serde_json::to_string_pretty(books)?;

        self.write_atomic(&json)?;

        log::debug!("Saved {} book(s) to {}", books.len(), self.path.display());
        Ok(())
    }

    /// Replaces the catalog file, naming it in any failure
    fn write_atomic(&self, content: &str) -> CatalogResult<()> {
        file::write_atomic(&self.path, content).map_err(|e| CatalogError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }
}

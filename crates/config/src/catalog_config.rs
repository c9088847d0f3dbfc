//! Catalog file and listing configuration section

use crate::validation::{self, ConfigSection, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest page size accepted for listings
pub const MAX_PAGE_SIZE: usize = 1000;

/// Catalog storage and display settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file holding the book records
    pub path: PathBuf,

    /// Number of books shown per page when listing
    pub page_size: usize,

    /// List authors alphabetically instead of in order of first appearance
    pub sort_authors: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("books.json"),
            page_size: 50,
            sort_authors: true,
        }
    }
}

impl ConfigSection for CatalogConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        validation::collect_errors([
            validation::not_empty(&self.path.to_string_lossy(), "catalog.path"),
            validation::in_range(self.page_size, 1, MAX_PAGE_SIZE, "catalog.page_size"),
        ])
    }

    fn merge(&mut self, other: Self) {
        self.path = other.path;
        self.page_size = other.page_size;
        self.sort_authors = other.sort_authors;
    }

    fn section_name(&self) -> &'static str {
        "catalog"
    }
}

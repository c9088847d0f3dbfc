//! Bookshelf catalog store
//!
//! A catalog is a single JSON file holding an array of [`Book`] records.
//! [`Catalog`] opens the file (creating it as `[]` when missing) and exposes
//! the record operations: add, list by page, update, delete, view and
//! distinct authors.
//!
//! # Example
//!
//! ```rust,no_run
//! use bookshelf_catalog::Catalog;
//! use bookshelf_core::{BookFields, YearPublished};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::open("books.json")?;
//! let year = YearPublished::parse("1965")?;
//! let book = catalog.add(BookFields::new("Dune", "Herbert", "Ace", year))?;
//! assert_eq!(catalog.get(book.id)?, Some(book));
//! # Ok(())
//! # }
//! ```
//!
//! Only one process should use a catalog file at a time. Nothing enforces this.

mod catalog;
mod error;
pub mod pagination;
pub mod store;

pub use catalog::{distinct_authors, next_id, AuthorOrder, Catalog};
pub use error::{CatalogError, CatalogResult};
pub use pagination::{page_count, paginate, Page};
pub use store::JsonStore;

pub use bookshelf_core::{Book, BookFields, BookId};

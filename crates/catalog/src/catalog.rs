//! Record operations over the catalog file
//!
//! Each operation is a self-contained read-modify-write cycle: load the whole
//! array, act on it in memory, and save the whole array if anything changed.
//! Lookups scan linearly and act on the first record with a matching id.

use crate::pagination::{paginate, Page};
use crate::store::JsonStore;
use crate::{CatalogError, CatalogResult};
use bookshelf_core::{Book, BookFields, BookId};
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

/// Order in which distinct authors are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorOrder {
    /// Lexicographic byte order
    #[default]
    Sorted,
    /// Order of first appearance in the catalog
    FirstSeen,
}

/// Handle to a catalog file
///
/// The path is owned by the handle; nothing about the catalog is global.
#[derive(Debug, Clone)]
pub struct Catalog {
    store: JsonStore,
    author_order: AuthorOrder,
}

impl Catalog {
    /// Opens the catalog at `path`, creating it as `[]` if it is missing
    pub fn open(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let store = JsonStore::new(path);
        store.ensure()?;

        Ok(Self {
            store,
            author_order: AuthorOrder::default(),
        })
    }

    pub fn with_author_order(mut self, order: AuthorOrder) -> Self {
        self.author_order = order;
        self
    }

    /// Returns the catalog file path
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Loads every record
    pub fn load(&self) -> CatalogResult<Vec<Book>> {
        self.store.load()
    }

    /// Replaces every record
    pub fn save(&self, books: &[Book]) -> CatalogResult<()> {
        self.store.save(books)
    }

    /// Adds a book and returns it with its assigned id
    pub fn add(&self, fields: BookFields) -> CatalogResult<Book> {
        let mut books = self.load()?;
        let book = Book::new(next_id(&books), fields);
        books.push(book.clone());
        self.save(&books)?;

        log::info!("Added book {} '{}'", book.id, book.title);
        Ok(book)
    }

    /// Finds a book by id
    pub fn get(&self, id: BookId) -> CatalogResult<Option<Book>> {
        Ok(self.load()?.into_iter().find(|book| book.id == id))
    }

    /// Overwrites title, author, publisher and year of the book with `id`
    ///
    /// Returns false and leaves the file untouched if no book matches.
    pub fn update(&self, id: BookId, fields: BookFields) -> CatalogResult<bool> {
        let updated = self.update_with(id, |_| Ok::<_, CatalogError>(fields))?;
        Ok(updated.is_some())
    }

    /// Updates the book with `id` using fields produced from its current state
    ///
    /// `produce` runs only when a match exists, so callers can prompt for new
    /// values after showing the current ones. If it fails, nothing is written.
    /// Returns the updated book, or None if no book matches.
    pub fn update_with<F, E>(&self, id: BookId, produce: F) -> Result<Option<Book>, E>
    where
        F: FnOnce(&Book) -> Result<BookFields, E>,
        E: From<CatalogError>,
    {
        let mut books = self.load()?;

        let Some(book) = books.iter_mut().find(|book| book.id == id) else {
            log::debug!("No book with id {} to update", id);
            return Ok(None);
        };

        let fields = produce(&*book)?;
        book.apply(fields);
        let updated = book.clone();

        self.save(&books)?;

        log::info!("Updated book {} '{}'", updated.id, updated.title);
        Ok(Some(updated))
    }

    /// Removes the book with `id`, keeping the others in order
    ///
    /// Returns the removed book, or None (file untouched) if no book matches.
    pub fn delete(&self, id: BookId) -> CatalogResult<Option<Book>> {
        let mut books = self.load()?;

        let Some(index) = books.iter().position(|book| book.id == id) else {
            log::debug!("No book with id {} to delete", id);
            return Ok(None);
        };

        let removed = books.remove(index);
        self.save(&books)?;

        log::info!("Deleted book {} '{}'", removed.id, removed.title);
        Ok(Some(removed))
    }

    /// Splits all records into pages of `page_size`
    pub fn pages(&self, page_size: usize) -> CatalogResult<Vec<Page>> {
        Ok(paginate(self.load()?, page_size))
    }

    /// Returns each distinct author once
    ///
    /// Authors are compared as raw text: case-sensitive and untrimmed.
    pub fn authors(&self) -> CatalogResult<Vec<String>> {
        Ok(distinct_authors(&self.load()?, self.author_order))
    }

    /// Returns the number of records
    pub fn count(&self) -> CatalogResult<usize> {
        Ok(self.load()?.len())
    }
}

/// Id for the next added book: one past the highest existing id
///
/// With no deletions this is `count + 1`. After deletions it never collides
/// with a surviving record, but the id of a deleted highest record comes back:
/// the file keeps no counter, so ids {1, 2, 3} minus 3 hand out 3 again.
pub fn next_id(books: &[Book]) -> BookId {
    books
        .iter()
        .map(|book| book.id)
        .max()
        .unwrap_or_default()
        .next()
}

/// Distinct author values in the requested order
pub fn distinct_authors(books: &[Book], order: AuthorOrder) -> Vec<String> {
    match order {
        AuthorOrder::Sorted => books
            .iter()
            .map(|book| book.author.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect(),
        AuthorOrder::FirstSeen => {
            let mut seen = HashSet::new();
            books
                .iter()
                .filter(|book| seen.insert(book.author.as_str()))
                .map(|book| book.author.clone())
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::YearPublished;

    fn book(id: u64, author: &str) -> Book {
        Book::new(
            BookId::new(id),
            BookFields::new("Title", author, "Publisher", YearPublished::parse("1990").unwrap()),
        )
    }

    #[test]
    fn test_next_id_empty() {
        assert_eq!(next_id(&[]), BookId::new(1));
    }

    #[test]
    fn test_next_id_after_gap() {
        let books = vec![book(1, "a"), book(3, "b")];
        assert_eq!(next_id(&books), BookId::new(4));
    }

    #[test]
    fn test_next_id_unordered() {
        let books = vec![book(5, "a"), book(2, "b")];
        assert_eq!(next_id(&books), BookId::new(6));
    }

    #[test]
    fn test_next_id_reuses_deleted_maximum() {
        let remaining = vec![book(1, "a"), book(2, "b")];
        assert_eq!(next_id(&remaining), BookId::new(3));
    }

    #[test]
    fn test_distinct_authors_sorted() {
        let books = vec![
            book(1, "Tolkien"),
            book(2, "austen"),
            book(3, "Austen"),
            book(4, "Tolkien"),
            book(5, " Austen"),
        ];
        assert_eq!(
            distinct_authors(&books, AuthorOrder::Sorted),
            vec![" Austen", "Austen", "Tolkien", "austen"]
        );
    }

    #[test]
    fn test_distinct_authors_first_seen() {
        let books = vec![book(1, "Tolkien"), book(2, "Austen"), book(3, "Tolkien")];
        assert_eq!(
            distinct_authors(&books, AuthorOrder::FirstSeen),
            vec!["Tolkien", "Austen"]
        );
    }

    #[test]
    fn test_distinct_authors_includes_empty() {
        let books = vec![book(1, ""), book(2, "")];
        assert_eq!(distinct_authors(&books, AuthorOrder::Sorted), vec![""]);
    }
}

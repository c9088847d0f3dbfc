//! Domain types for bookshelf
//!
//! - `book`: Book records and their identifiers
//! - `year`: validated publication year
//! - `common`: shared traits

mod book;
mod common;
mod year;

pub use book::{Book, BookFields, BookId};
pub use common::Validator;
pub use year::{YearPublished, MAX_YEAR, MIN_YEAR};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_types_are_exported() {
        let year = YearPublished::parse("1965").expect("valid year");
        let fields = BookFields::new("Dune", "Herbert", "Ace", year);
        let book = Book::new(BookId::new(1), fields);
        assert!(book.is_valid());
    }
}

//! Splitting the catalog into fixed-size pages for display

use bookshelf_core::Book;

/// A contiguous slice of records shown together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    pub number: usize,
    /// Total number of pages in the listing
    pub total: usize,
    pub books: Vec<Book>,
}

impl Page {
    /// Returns true if no page follows this one
    pub fn is_last(&self) -> bool {
        self.number == self.total
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Number of pages needed for `count` records, `ceil(count / page_size)`
///
/// A page size of 0 is treated as 1.
pub fn page_count(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Splits records into pages of `page_size`, preserving order
///
/// Every page holds `page_size` records except possibly the last.
/// No records means no pages.
pub fn paginate(books: Vec<Book>, page_size: usize) -> Vec<Page> {
    let page_size = page_size.max(1);
    let total = page_count(books.len(), page_size);

    books
        .chunks(page_size)
        .enumerate()
        .map(|(i, chunk)| Page {
            number: i + 1,
            total,
            books: chunk.to_vec(),
        })
        .collect()
}

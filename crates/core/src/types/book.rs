//! Book domain model

use crate::types::{Validator, YearPublished, MAX_YEAR, MIN_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a book within a catalog
///
/// Serialized as a bare integer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// Creates a BookId from its numeric value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parses user input, mapping anything unparsable to id 0
    ///
    /// Id 0 is never assigned, so a lookup with it finds nothing.
    pub fn parse_lenient(input: &str) -> Self {
        Self(input.trim().parse().unwrap_or(0))
    }

    /// Returns the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the id following this one
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for BookId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog entry
///
/// `year_published` is kept as text in the persisted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year_published: String,
}

impl Book {
    /// Creates a book from validated fields
    pub fn new(id: BookId, fields: BookFields) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            publisher: fields.publisher,
            year_published: fields.year_published.into_string(),
        }
    }

    /// Overwrites every field except the id
    pub fn apply(&mut self, fields: BookFields) {
        self.title = fields.title;
        self.author = fields.author;
        self.publisher = fields.publisher;
        self.year_published = fields.year_published.into_string();
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.id.value() == 0 {
            errors.push("Id must be greater than zero".to_string());
        }

        if let Err(e) = YearPublished::parse(&self.year_published) {
            errors.push(format!(
                "Year published must be an integer between {} and {}: {}",
                MIN_YEAR, MAX_YEAR, e
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// The user-editable part of a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year_published: YearPublished,
}

impl BookFields {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        year_published: YearPublished,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
            year_published,
        }
    }
}

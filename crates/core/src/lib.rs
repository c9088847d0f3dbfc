pub mod error;
pub mod file;
pub mod types;

// Re-export commonly used types
pub use error::{YearError, YearResult};
pub use types::{Book, BookFields, BookId, Validator, YearPublished, MAX_YEAR, MIN_YEAR};

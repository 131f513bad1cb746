//! Book entity.

/// A catalogued book.
///
/// ISBN and title are unique across all stored books; the store enforces
/// both (see [`crate::domain::repositories::BookRepository`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Book {
    /// Creates a book that has not been persisted yet.
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    /// Returns the same book carrying a store-assigned identifier.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

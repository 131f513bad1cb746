//! Repository trait for book data access.

use crate::domain::entities::Book;
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Example-based book filter.
///
/// Every field that is set (and not blank) must be contained in the matching
/// book's field, ignoring case. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookFilter {
    pub fn new(title: Option<String>, author: Option<String>) -> Self {
        Self {
            title: non_blank(title),
            author: non_blank(author),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }

    /// In-process evaluation of the filter, used by the memory store.
    pub fn matches(&self, book: &Book) -> bool {
        contains_ignore_case(&book.title, self.title.as_deref())
            && contains_ignore_case(&book.author, self.author.as_deref())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// Repository interface for books.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBookRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryBookRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
///
/// # Uniqueness
///
/// Implementations must reject a second book with the same ISBN or title
/// with the same errors the service pre-check raises
/// ([`AppError::duplicate_isbn`], [`AppError::duplicate_title`]).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Inserts the book when it has no id, otherwise overwrites the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BusinessRule`] on ISBN/title conflicts.
    /// Returns [`AppError::NotFound`] when overwriting an id that does not exist.
    async fn save(&self, book: Book) -> Result<Book, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError>;

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, AppError>;

    /// Deletes a stored book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if the book has no id.
    /// Returns [`AppError::BusinessRule`] if loans still reference the book.
    async fn delete(&self, book: Book) -> Result<(), AppError>;

    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, AppError>;

    async fn exists_by_title(&self, title: &str) -> Result<bool, AppError>;

    /// Filtered, paginated listing ordered by id.
    async fn find_by_example(
        &self,
        filter: BookFilter,
        page: PageRequest,
    ) -> Result<Page<Book>, AppError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_wildcards() {
        let filter = BookFilter::new(Some(String::new()), None);
        assert!(filter.is_empty());
        assert!(filter.matches(&Book::new("Anything", "Anyone", "1")));
    }

    #[test]
    fn test_matches_substring_ignoring_case() {
        let book = Book::new("Aventuras de Jhonson", "James Jhonson", "123456789");

        assert!(BookFilter::new(Some("aventuras".into()), None).matches(&book));
        assert!(BookFilter::new(None, Some("JHON".into())).matches(&book));
        assert!(BookFilter::new(Some("de J".into()), Some("james".into())).matches(&book));
        assert!(!BookFilter::new(Some("aventuras".into()), Some("washington".into())).matches(&book));
    }
}

//! Book creation, lookup, update, removal and search.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::Book;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::{BookFilter, BookRepository};
use crate::error::{AppError, AppResult};

/// Service enforcing the book catalogue rules.
///
/// A new book is rejected when its ISBN is already stored, and then when its
/// title is already stored. Only the first violation is reported.
pub struct BookService<R: BookRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: BookRepository + ?Sized> BookService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BusinessRule`] with "Isbn já cadastrado." or
    /// "Título já cadastrado." when the book collides with a stored one.
    pub async fn save(&self, book: Book) -> AppResult<Book> {
        self.validate_uniqueness(&book).await?;

        let saved = self.repository.save(book).await?;
        info!(id = ?saved.id, isbn = %saved.isbn, "Book created");

        Ok(saved)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        self.repository.find_by_id(id).await
    }

    pub async fn find_by_isbn(&self, isbn: &str) -> AppResult<Option<Book>> {
        self.repository.find_by_isbn(isbn).await
    }

    /// Re-saves a stored book.
    ///
    /// The uniqueness pre-check is not repeated here; the store still rejects
    /// collisions.
    pub async fn update(&self, book: Book) -> AppResult<Book> {
        let id = book
            .id
            .ok_or_else(|| AppError::invalid_argument("Book id can't be null"))?;

        let updated = self.repository.save(book).await?;
        info!(id, "Book updated");

        Ok(updated)
    }

    pub async fn delete(&self, book: Book) -> AppResult<()> {
        let id = book
            .id
            .ok_or_else(|| AppError::invalid_argument("Book id can't be null"))?;

        self.repository.delete(book).await?;
        info!(id, "Book deleted");

        Ok(())
    }

    /// Pages through books whose title and/or author contain the filter values.
    pub async fn find_by_author_and_title(
        &self,
        filter: BookFilter,
        page: PageRequest,
    ) -> AppResult<Page<Book>> {
        self.repository.find_by_example(filter, page).await
    }

    /// Checks that the backing store answers.
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }

    async fn validate_uniqueness(&self, book: &Book) -> AppResult<()> {
        if self.repository.exists_by_isbn(&book.isbn).await? {
            warn!(isbn = %book.isbn, "Rejected book with duplicate isbn");
            return Err(AppError::duplicate_isbn());
        }

        if self.repository.exists_by_title(&book.title).await? {
            warn!(title = %book.title, "Rejected book with duplicate title");
            return Err(AppError::duplicate_title());
        }

        Ok(())
    }
}

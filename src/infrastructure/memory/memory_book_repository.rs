//! In-memory implementation of the book repository.

use async_trait::async_trait;

use super::MemoryStore;
use crate::domain::entities::Book;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::{BookFilter, BookRepository};
use crate::error::{AppError, BOOK_HAS_LOANS_MESSAGE};

/// Book repository over a [`MemoryStore`].
pub struct MemoryBookRepository {
    store: MemoryStore,
}

impl MemoryBookRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn save(&self, book: Book) -> Result<Book, AppError> {
        let mut state = self.store.state.write().await;

        if let Some(id) = book.id
            && !state.books.contains_key(&id)
        {
            return Err(AppError::not_found(format!("Book {id} not found")));
        }

        if state.isbn_taken(&book.isbn, book.id) {
            return Err(AppError::duplicate_isbn());
        }
        if state.title_taken(&book.title, book.id) {
            return Err(AppError::duplicate_title());
        }

        let id = match book.id {
            Some(id) => id,
            None => state.next_book_id(),
        };
        let stored = book.with_id(id);
        state.books.insert(id, stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        Ok(self.store.state.read().await.books.get(&id).cloned())
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, AppError> {
        let state = self.store.state.read().await;
        Ok(state.books.values().find(|b| b.isbn == isbn).cloned())
    }

    async fn delete(&self, book: Book) -> Result<(), AppError> {
        let id = book
            .id
            .ok_or_else(|| AppError::invalid_argument("Book id can't be null"))?;

        let mut state = self.store.state.write().await;
        if state.has_loans(id) {
            return Err(AppError::business(BOOK_HAS_LOANS_MESSAGE));
        }
        state.books.remove(&id);

        Ok(())
    }

    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, AppError> {
        Ok(self.store.state.read().await.isbn_taken(isbn, None))
    }

    async fn exists_by_title(&self, title: &str) -> Result<bool, AppError> {
        Ok(self.store.state.read().await.title_taken(title, None))
    }

    async fn find_by_example(
        &self,
        filter: BookFilter,
        page: PageRequest,
    ) -> Result<Page<Book>, AppError> {
        let state = self.store.state.read().await;

        let matching: Vec<&Book> = state.books.values().filter(|b| filter.matches(b)).collect();
        let total = matching.len() as i64;

        let content = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .cloned()
            .collect();

        Ok(Page::new(content, page, total))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

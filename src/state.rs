//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::api::dto::pagination::PageLimits;
use crate::application::services::{BookService, LoanService};
use crate::domain::repositories::{BookRepository, LoanRepository};
use crate::infrastructure::memory::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService<dyn BookRepository>>,
    pub loan_service: Arc<LoanService<dyn LoanRepository>>,
    pub page_limits: PageLimits,
}

impl AppState {
    pub fn new(
        books: Arc<dyn BookRepository>,
        loans: Arc<dyn LoanRepository>,
        page_limits: PageLimits,
    ) -> Self {
        Self {
            book_service: Arc::new(BookService::new(books)),
            loan_service: Arc::new(LoanService::new(loans)),
            page_limits,
        }
    }

    /// State backed by a fresh [`MemoryStore`].
    pub fn in_memory(page_limits: PageLimits) -> Self {
        let store = MemoryStore::new();
        Self::new(
            Arc::new(store.book_repository()),
            Arc::new(store.loan_repository()),
            page_limits,
        )
    }
}

//! Shared in-process storage backing the memory repositories.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::debug;

use super::{MemoryBookRepository, MemoryLoanRepository};
use crate::domain::entities::Book;

/// Loan row as stored: the book is referenced by id, like the relational schema.
#[derive(Debug, Clone)]
pub(super) struct StoredLoan {
    pub book_id: i64,
    pub customer: String,
    pub loan_date: NaiveDate,
    pub returned: bool,
}

#[derive(Debug, Default)]
pub(super) struct StoreState {
    pub last_book_id: i64,
    pub last_loan_id: i64,
    pub books: BTreeMap<i64, Book>,
    pub loans: BTreeMap<i64, StoredLoan>,
}

impl StoreState {
    pub fn next_book_id(&mut self) -> i64 {
        self.last_book_id += 1;
        self.last_book_id
    }

    pub fn next_loan_id(&mut self) -> i64 {
        self.last_loan_id += 1;
        self.last_loan_id
    }

    /// Returns true if a book other than `except_id` already has this ISBN.
    pub fn isbn_taken(&self, isbn: &str, except_id: Option<i64>) -> bool {
        self.books
            .iter()
            .any(|(id, book)| Some(*id) != except_id && book.isbn == isbn)
    }

    /// Returns true if a book other than `except_id` already has this title.
    pub fn title_taken(&self, title: &str, except_id: Option<i64>) -> bool {
        self.books
            .iter()
            .any(|(id, book)| Some(*id) != except_id && book.title == title)
    }

    pub fn has_loans(&self, book_id: i64) -> bool {
        self.loans.values().any(|loan| loan.book_id == book_id)
    }
}

/// In-process store shared by [`MemoryBookRepository`] and
/// [`MemoryLoanRepository`].
///
/// Identifiers start at 1 and are never reused. Every write runs under one
/// write lock, so uniqueness checks and inserts are atomic.
///
/// # Use Cases
///
/// - Handler and service tests without a database
/// - Local runs with `STORAGE_BACKEND=memory`
#[derive(Clone, Default)]
pub struct MemoryStore {
    pub(super) state: Arc<RwLock<StoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        debug!("Using in-memory storage");
        Self::default()
    }

    pub fn book_repository(&self) -> MemoryBookRepository {
        MemoryBookRepository::new(self.clone())
    }

    pub fn loan_repository(&self) -> MemoryLoanRepository {
        MemoryLoanRepository::new(self.clone())
    }
}

//! Loan entity.

use chrono::{NaiveDate, Utc};

use super::Book;

/// A book lent to a customer.
///
/// `book` is a snapshot of the stored book the loan points at; loans never
/// own or modify books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub id: Option<i64>,
    pub book: Book,
    pub customer: String,
    pub loan_date: NaiveDate,
    pub returned: bool,
}

impl Loan {
    /// Creates an unsaved loan dated today (UTC) and not yet returned.
    pub fn new(book: Book, customer: impl Into<String>) -> Self {
        Self {
            id: None,
            book,
            customer: customer.into(),
            loan_date: Utc::now().date_naive(),
            returned: false,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// ISBN of the lent book.
    pub fn isbn(&self) -> &str {
        &self.book.isbn
    }
}

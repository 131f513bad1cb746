//! PostgreSQL implementation of the loan repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use super::db_error::is_foreign_key_violation;
use crate::domain::entities::{Book, Loan};
use crate::domain::repositories::LoanRepository;
use crate::error::AppError;

/// PostgreSQL repository for loans.
pub struct PgLoanRepository {
    pool: Arc<PgPool>,
}

impl PgLoanRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LoanRow {
    id: i64,
    customer: String,
    loan_date: NaiveDate,
    returned: bool,
    book_id: i64,
    title: String,
    author: String,
    isbn: String,
}

impl From<LoanRow> for Loan {
    fn from(row: LoanRow) -> Self {
        Loan {
            id: Some(row.id),
            book: Book::new(row.title, row.author, row.isbn).with_id(row.book_id),
            customer: row.customer,
            loan_date: row.loan_date,
            returned: row.returned,
        }
    }
}

#[async_trait]
impl LoanRepository for PgLoanRepository {
    async fn save(&self, loan: Loan) -> Result<Loan, AppError> {
        let book_id = loan
            .book
            .id
            .ok_or_else(|| AppError::invalid_argument("Loan book id can't be null"))?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO loans (book_id, customer, loan_date, returned)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(book_id)
        .bind(&loan.customer)
        .bind(loan.loan_date)
        .bind(loan.returned)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::not_found(format!("Book {book_id} not found"))
            } else {
                e.into()
            }
        })?;

        Ok(loan.with_id(id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Loan>, AppError> {
        let row = sqlx::query_as::<_, LoanRow>(
            r#"
            SELECT l.id, l.customer, l.loan_date, l.returned,
                   b.id AS book_id, b.title, b.author, b.isbn
            FROM loans l
            JOIN books b ON b.id = l.book_id
            WHERE l.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Loan::from))
    }
}

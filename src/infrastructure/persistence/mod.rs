//! PostgreSQL repository implementations.
//!
//! Queries are built at runtime with `sqlx::query_as` and `sqlx::QueryBuilder`
//! and bound through prepared statements.
//!
//! # Repositories
//!
//! - [`PgBookRepository`] - Book storage, uniqueness lookups and filtered paging
//! - [`PgLoanRepository`] - Loan storage

pub mod db_error;
pub mod pg_book_repository;
pub mod pg_loan_repository;

pub use pg_book_repository::PgBookRepository;
pub use pg_loan_repository::PgLoanRepository;

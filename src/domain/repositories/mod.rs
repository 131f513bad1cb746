//! Repository trait definitions for the domain layer.
//!
//! Traits define the persistence contract; implementations live in
//! `crate::infrastructure::persistence` (PostgreSQL) and
//! `crate::infrastructure::memory` (in-process). Mock implementations are
//! generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`BookRepository`] - Book CRUD, uniqueness lookups and filtered paging
//! - [`LoanRepository`] - Loan creation and lookup

pub mod book_repository;
pub mod loan_repository;

pub use book_repository::{BookFilter, BookRepository};
pub use loan_repository::LoanRepository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use loan_repository::MockLoanRepository;

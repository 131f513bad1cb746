//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and business rules, and are what the
//! HTTP handlers and the admin CLI talk to.
//!
//! - [`services::book_service::BookService`] - Book catalogue rules
//! - [`services::loan_service::LoanService`] - Loan registration

pub mod services;

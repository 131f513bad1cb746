//! Business logic services for the application layer.

pub mod book_service;
pub mod loan_service;

pub use book_service::BookService;
pub use loan_service::LoanService;

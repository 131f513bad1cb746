//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod books;
pub mod health;
pub mod loans;

pub use books::{
    create_book_handler, delete_book_handler, get_book_handler, search_books_handler,
    update_book_handler,
};
pub use health::health_handler;
pub use loans::create_loan_handler;

//! Core domain entities.
//!
//! Entities carry an optional identifier: `None` until the store assigns one
//! on the first save.

pub mod book;
pub mod loan;

pub use book::Book;
pub use loan::Loan;

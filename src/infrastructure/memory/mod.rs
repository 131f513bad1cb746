//! In-process repository implementations.
//!
//! Both repositories share one [`MemoryStore`], so loans can check that
//! their book exists and books with loans cannot be deleted, mirroring the
//! foreign key of the relational schema.

mod memory_book_repository;
mod memory_loan_repository;
mod store;

pub use memory_book_repository::MemoryBookRepository;
pub use memory_loan_repository::MemoryLoanRepository;
pub use store::MemoryStore;

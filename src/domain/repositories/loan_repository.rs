//! Repository trait for loan data access.

use crate::domain::entities::Loan;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for loans.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLoanRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryLoanRepository`] - in-process store
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// Stores a new loan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if the loan's book has no id.
    /// Returns [`AppError::NotFound`] if the referenced book does not exist.
    async fn save(&self, loan: Loan) -> Result<Loan, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Loan>, AppError>;
}

//! Loan creation service.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::Loan;
use crate::domain::repositories::LoanRepository;
use crate::error::AppResult;

/// Service for registering loans.
///
/// The lent book is resolved by the caller before the loan reaches this
/// service.
pub struct LoanService<R: LoanRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LoanRepository + ?Sized> LoanService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn save(&self, loan: Loan) -> AppResult<Loan> {
        let saved = self.repository.save(loan).await?;
        info!(id = ?saved.id, isbn = %saved.isbn(), customer = %saved.customer, "Loan created");

        Ok(saved)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Loan>> {
        self.repository.find_by_id(id).await
    }
}

//! In-memory implementation of the loan repository.

use async_trait::async_trait;

use super::MemoryStore;
use super::store::StoredLoan;
use crate::domain::entities::Loan;
use crate::domain::repositories::LoanRepository;
use crate::error::AppError;

/// Loan repository over a [`MemoryStore`].
pub struct MemoryLoanRepository {
    store: MemoryStore,
}

impl MemoryLoanRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LoanRepository for MemoryLoanRepository {
    async fn save(&self, loan: Loan) -> Result<Loan, AppError> {
        let book_id = loan
            .book
            .id
            .ok_or_else(|| AppError::invalid_argument("Loan book id can't be null"))?;

        let mut state = self.store.state.write().await;
        if !state.books.contains_key(&book_id) {
            return Err(AppError::not_found(format!("Book {book_id} not found")));
        }

        let id = state.next_loan_id();
        state.loans.insert(
            id,
            StoredLoan {
                book_id,
                customer: loan.customer.clone(),
                loan_date: loan.loan_date,
                returned: loan.returned,
            },
        );

        Ok(loan.with_id(id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Loan>, AppError> {
        let state = self.store.state.read().await;

        let loan = state.loans.get(&id).and_then(|stored| {
            state.books.get(&stored.book_id).map(|book| Loan {
                id: Some(id),
                book: book.clone(),
                customer: stored.customer.clone(),
                loan_date: stored.loan_date,
                returned: stored.returned,
            })
        });

        Ok(loan)
    }
}

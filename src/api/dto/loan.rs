//! DTOs for loan endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/loans`.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct LoanRequest {
    #[validate(
        required(message = "Isbn é obrigatório."),
        length(min = 1, message = "Isbn é obrigatório.")
    )]
    pub isbn: Option<String>,

    #[validate(
        required(message = "Cliente é obrigatório."),
        length(min = 1, message = "Cliente é obrigatório.")
    )]
    pub customer: Option<String>,
}

/// Loan as returned by the API. The book is referenced by ISBN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResponse {
    pub id: Option<i64>,
    pub isbn: String,
    pub customer: String,
}

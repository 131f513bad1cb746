//! Handler for loan creation.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::loan::{LoanRequest, LoanResponse};
use crate::api::extract::ApiJson;
use crate::api::mapping::{loan_from_request, loan_to_response};
use crate::error::AppError;
use crate::state::AppState;

/// Lends the book with the given ISBN to a customer.
///
/// # Endpoint
///
/// `POST /api/loans`
///
/// # Request Body
///
/// ```json
/// { "isbn": "159736482", "customer": "Stive" }
/// ```
///
/// # Errors
///
/// Returns 400 if `isbn` or `customer` is missing.
/// Returns 404 with an empty body if no book has this ISBN.
pub async fn create_loan_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoanRequest>,
) -> Result<(StatusCode, Json<LoanResponse>), AppError> {
    payload.validate()?;

    let isbn = payload.isbn.clone().unwrap_or_default();
    let book = state
        .book_service
        .find_by_isbn(&isbn)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Book with isbn {isbn} not found")))?;

    let loan = state
        .loan_service
        .save(loan_from_request(payload, book))
        .await?;

    Ok((StatusCode::CREATED, Json(loan_to_response(loan))))
}

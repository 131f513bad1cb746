//! Handlers for book endpoints (create, read, update, delete, search).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::book::{BookRequest, BookResponse, UpdateBookRequest};
use crate::api::dto::pagination::{BookSearchParams, PageResponse};
use crate::api::extract::ApiJson;
use crate::api::mapping::{apply_update, book_from_request, book_to_response, page_to_response};
use crate::domain::entities::Book;
use crate::domain::repositories::BookFilter;
use crate::error::AppError;
use crate::state::AppState;

async fn load_book(state: &AppState, id: i64) -> Result<Book, AppError> {
    state
        .book_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Book {id} not found")))
}

/// Creates a book.
///
/// # Endpoint
///
/// `POST /api/books`
///
/// # Request Body
///
/// ```json
/// { "title": "Aventuras de Jhonson", "author": "James Jhonson", "isbn": "123456789" }
/// ```
///
/// # Errors
///
/// Returns 400 with one message per missing field.
/// Returns 400 with a single message if the ISBN or title is already taken.
pub async fn create_book_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BookRequest>,
) -> Result<(StatusCode, Json<BookResponse>), AppError> {
    payload.validate()?;

    let book = state.book_service.save(book_from_request(payload)).await?;

    Ok((StatusCode::CREATED, Json(book_to_response(book))))
}

/// Returns a book by id.
///
/// # Endpoint
///
/// `GET /api/books/{id}`
///
/// # Errors
///
/// Returns 404 with an empty body if the book doesn't exist.
pub async fn get_book_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<BookResponse>, AppError> {
    let book = load_book(&state, id).await?;

    Ok(Json(book_to_response(book)))
}

/// Updates the title and author of a book.
///
/// # Endpoint
///
/// `PUT /api/books/{id}`
///
/// # Request Body
///
/// ```json
/// { "title": "Novo título", "author": "Washington" }
/// ```
///
/// Absent fields keep their stored value. The ISBN can't be changed.
///
/// # Errors
///
/// Returns 400 if a field is present but empty, or if the new title belongs
/// to another book.
/// Returns 404 if the book doesn't exist.
pub async fn update_book_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateBookRequest>,
) -> Result<Json<BookResponse>, AppError> {
    payload.validate()?;

    let book = load_book(&state, id).await?;

    let updated = state
        .book_service
        .update(apply_update(book, payload))
        .await?;

    Ok(Json(book_to_response(updated)))
}

/// Deletes a book.
///
/// # Endpoint
///
/// `DELETE /api/books/{id}`
///
/// # Errors
///
/// Returns 404 if the book doesn't exist.
/// Returns 400 if the book has registered loans.
pub async fn delete_book_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let book = load_book(&state, id).await?;

    state.book_service.delete(book).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Searches books by title and author.
///
/// # Endpoint
///
/// `GET /api/books?title=&author=&page=&size=`
///
/// Both filters match case-insensitively anywhere in the field. Absent or
/// empty filters match every book. Results are ordered by id.
pub async fn search_books_handler(
    State(state): State<AppState>,
    Query(params): Query<BookSearchParams>,
) -> Result<Json<PageResponse<BookResponse>>, AppError> {
    let page_request = params.page_request(state.page_limits);
    let filter = BookFilter::new(params.title, params.author);

    let page = state
        .book_service
        .find_by_author_and_title(filter, page_request)
        .await?;

    Ok(Json(page_to_response(page, book_to_response)))
}

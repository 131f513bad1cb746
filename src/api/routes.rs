//! API route configuration.

use crate::api::handlers::{
    create_book_handler, create_loan_handler, delete_book_handler, get_book_handler,
    search_books_handler, update_book_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST   /books`        - Create a book
/// - `GET    /books`        - Search books by title/author (paginated)
/// - `GET    /books/{id}`   - Fetch a book
/// - `PUT    /books/{id}`   - Update title and author
/// - `DELETE /books/{id}`   - Delete a book
/// - `POST   /loans`        - Lend a book by ISBN
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/books",
            get(search_books_handler).post(create_book_handler),
        )
        .route(
            "/books/{id}",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler),
        )
        .route("/loans", post(create_loan_handler))
}

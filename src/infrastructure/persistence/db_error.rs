//! Translation of database failures into [`AppError`].

use crate::error::AppError;

/// Unique constraint on `books.isbn`.
pub const BOOKS_ISBN_KEY: &str = "books_isbn_key";

/// Unique constraint on `books.title`.
pub const BOOKS_TITLE_KEY: &str = "books_title_key";

/// Maps a sqlx error to the application error taxonomy.
///
/// Unique violations on the book constraints become the same business errors
/// the service pre-check raises, so a concurrent insert that slips past the
/// pre-check is reported identically.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        match db.constraint() {
            Some(BOOKS_ISBN_KEY) => return AppError::duplicate_isbn(),
            Some(BOOKS_TITLE_KEY) => return AppError::duplicate_title(),
            _ => {}
        }
    }

    tracing::error!(error = %e, "Database error");
    AppError::internal("Database error")
}

/// Returns true for foreign-key violations (e.g. `loans.book_id`).
pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
}

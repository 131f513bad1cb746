//! PostgreSQL implementation of the book repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use super::db_error::is_foreign_key_violation;
use crate::domain::entities::Book;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::{BookFilter, BookRepository};
use crate::error::{AppError, BOOK_HAS_LOANS_MESSAGE};

/// PostgreSQL repository for books.
///
/// ISBN and title uniqueness is backed by the `books_isbn_key` and
/// `books_title_key` constraints.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author: String,
    isbn: String,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book::new(row.title, row.author, row.isbn).with_id(row.id)
    }
}

/// Builds an `ILIKE` pattern matching `value` anywhere, with wildcards escaped.
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &BookFilter) {
    let mut separator = " WHERE ";

    for (column, value) in [("title", &filter.title), ("author", &filter.author)] {
        if let Some(value) = value {
            builder
                .push(separator)
                .push(column)
                .push(" ILIKE ")
                .push_bind(contains_pattern(value))
                .push(" ESCAPE '\\'");
            separator = " AND ";
        }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn save(&self, book: Book) -> Result<Book, AppError> {
        let row = match book.id {
            None => {
                sqlx::query_as::<_, BookRow>(
                    r#"
                    INSERT INTO books (title, author, isbn)
                    VALUES ($1, $2, $3)
                    RETURNING id, title, author, isbn
                    "#,
                )
                .bind(&book.title)
                .bind(&book.author)
                .bind(&book.isbn)
                .fetch_one(self.pool.as_ref())
                .await?
            }
            Some(id) => sqlx::query_as::<_, BookRow>(
                r#"
                UPDATE books SET title = $2, author = $3, isbn = $4
                WHERE id = $1
                RETURNING id, title, author, isbn
                "#,
            )
            .bind(id)
            .bind(&book.title)
            .bind(&book.author)
            .bind(&book.isbn)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Book {id} not found")))?,
        };

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            "SELECT id, title, author, isbn FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, BookRow>(
            "SELECT id, title, author, isbn FROM books WHERE isbn = $1",
        )
        .bind(isbn)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Book::from))
    }

    async fn delete(&self, book: Book) -> Result<(), AppError> {
        let id = book
            .id
            .ok_or_else(|| AppError::invalid_argument("Book id can't be null"))?;

        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AppError::business(BOOK_HAS_LOANS_MESSAGE)
                } else {
                    e.into()
                }
            })?;

        Ok(())
    }

    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)",
        )
        .bind(isbn)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn exists_by_title(&self, title: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM books WHERE title = $1)",
        )
        .bind(title)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn find_by_example(
        &self,
        filter: BookFilter,
        page: PageRequest,
    ) -> Result<Page<Book>, AppError> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM books");
        push_filter(&mut count_query, &filter);

        let total = count_query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool.as_ref())
            .await?;

        let mut select_query =
            QueryBuilder::<Postgres>::new("SELECT id, title, author, isbn FROM books");
        push_filter(&mut select_query, &filter);
        select_query
            .push(" ORDER BY id LIMIT ")
            .push_bind(page.limit())
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows = select_query
            .build_query_as::<BookRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(Page::new(
            rows.into_iter().map(Book::from).collect(),
            page,
            total,
        ))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_wraps_value() {
        assert_eq!(contains_pattern("Jhonson"), "%Jhonson%");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn test_push_filter_without_fields() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM books");
        push_filter(&mut builder, &BookFilter::default());
        assert_eq!(builder.sql(), "SELECT COUNT(*) FROM books");
    }

    #[test]
    fn test_push_filter_with_both_fields() {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM books");
        let filter = BookFilter::new(Some("aventuras".into()), Some("james".into()));
        push_filter(&mut builder, &filter);
        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM books WHERE title ILIKE $1 ESCAPE '\\' AND author ILIKE $2 ESCAPE '\\'"
        );
    }
}

//! Conversions between API DTOs and domain entities.
//!
//! Request DTOs are validated before they reach these functions, so missing
//! fields fall back to empty strings only when called without validation.

use crate::api::dto::book::{BookRequest, BookResponse, UpdateBookRequest};
use crate::api::dto::loan::{LoanRequest, LoanResponse};
use crate::api::dto::pagination::{PageResponse, PageableInfo};
use crate::domain::entities::{Book, Loan};
use crate::domain::pagination::Page;

pub fn book_from_request(request: BookRequest) -> Book {
    Book::new(
        request.title.unwrap_or_default(),
        request.author.unwrap_or_default(),
        request.isbn.unwrap_or_default(),
    )
}

pub fn book_to_response(book: Book) -> BookResponse {
    BookResponse {
        id: book.id,
        title: book.title,
        author: book.author,
        isbn: book.isbn,
    }
}

/// Copies the editable fields of `request` onto a stored book.
///
/// The id and ISBN of `book` are kept.
pub fn apply_update(mut book: Book, request: UpdateBookRequest) -> Book {
    if let Some(title) = request.title {
        book.title = title;
    }
    if let Some(author) = request.author {
        book.author = author;
    }
    book
}

/// Builds a new loan of `book`, which must already be resolved by ISBN.
pub fn loan_from_request(request: LoanRequest, book: Book) -> Loan {
    Loan::new(book, request.customer.unwrap_or_default())
}

pub fn loan_to_response(loan: Loan) -> LoanResponse {
    LoanResponse {
        id: loan.id,
        isbn: loan.book.isbn,
        customer: loan.customer,
    }
}

pub fn page_to_response<T, U>(page: Page<T>, f: impl FnMut(T) -> U) -> PageResponse<U> {
    let page = page.map(f);
    let request = page.request;

    PageResponse {
        pageable: PageableInfo {
            page_number: request.page,
            page_size: request.size,
            offset: request.offset(),
        },
        total_elements: page.total_elements,
        total_pages: page.total_pages(),
        number_of_elements: page.number_of_elements(),
        number: request.page,
        size: request.size,
        first: page.is_first(),
        last: page.is_last(),
        empty: page.content.is_empty(),
        content: page.content,
    }
}

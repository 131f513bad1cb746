//! DTOs for book endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/books`.
///
/// Every field is required and must be non-empty.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct BookRequest {
    #[validate(
        required(message = "Título é obrigatório."),
        length(min = 1, message = "Título é obrigatório.")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "Autor é obrigatório."),
        length(min = 1, message = "Autor é obrigatório.")
    )]
    pub author: Option<String>,

    #[validate(
        required(message = "Isbn é obrigatório."),
        length(min = 1, message = "Isbn é obrigatório.")
    )]
    pub isbn: Option<String>,
}

/// Request body for `PUT /api/books/{id}`.
///
/// Only `title` and `author` can change; absent fields keep the stored value,
/// present ones must be non-empty. An `isbn` in the body is ignored.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateBookRequest {
    #[validate(length(min = 1, message = "Título é obrigatório."))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Autor é obrigatório."))]
    pub author: Option<String>,
}

/// Book as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

//! Application error type and its HTTP representation.
//!
//! Every user-facing failure is rendered with the same body shape:
//!
//! ```json
//! { "errors": ["Isbn já cadastrado."] }
//! ```
//!
//! Not-found outcomes are the exception and are returned as an empty `404`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// Message returned when a book with the same ISBN is already stored.
pub const DUPLICATE_ISBN_MESSAGE: &str = "Isbn já cadastrado.";

/// Message returned when a book with the same title is already stored.
pub const DUPLICATE_TITLE_MESSAGE: &str = "Título já cadastrado.";

/// Message returned when deleting a book that loans still reference.
pub const BOOK_HAS_LOANS_MESSAGE: &str = "Livro possui empréstimos registrados.";

/// Uniform error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrors {
    pub errors: Vec<String>,
}

impl ApiErrors {
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Field-presence failures on incoming transport objects.
    #[error("validation failed: {}", messages.join(", "))]
    Validation { messages: Vec<String> },

    /// A business rule rejected the operation (duplicate ISBN or title, ...).
    #[error("{message}")]
    BusinessRule { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    /// A caller broke an internal contract (e.g. deleting a book without id).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(messages: Vec<String>) -> Self {
        Self::Validation { messages }
    }

    pub fn business(message: impl Into<String>) -> Self {
        Self::BusinessRule {
            message: message.into(),
        }
    }

    pub fn duplicate_isbn() -> Self {
        Self::business(DUPLICATE_ISBN_MESSAGE)
    }

    pub fn duplicate_title() -> Self {
        Self::business(DUPLICATE_TITLE_MESSAGE)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BusinessRule { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidArgument { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Validation { messages } => {
                (status, Json(ApiErrors { errors: messages })).into_response()
            }
            AppError::BusinessRule { message } => {
                (status, Json(ApiErrors::single(message))).into_response()
            }
            AppError::NotFound { message } => {
                tracing::debug!(%message, "Resource not found");
                status.into_response()
            }
            AppError::InvalidArgument { message } | AppError::Internal { message } => {
                tracing::error!(%message, "Request failed");
                (status, Json(ApiErrors::single("Internal server error"))).into_response()
            }
        }
    }
}

/// Flattens validator output into a message list ordered by field name.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let messages = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field}: {}", e.code))
                })
            })
            .collect();

        AppError::validation(messages)
    }
}

/// Unreadable JSON bodies are reported like field validation failures.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(status = %rejection.status(), "Rejected JSON body");
        AppError::validation(vec![rejection.body_text()])
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        crate::infrastructure::persistence::db_error::map_sqlx_error(e)
    }
}

/// Result alias used across services and repositories.
pub type AppResult<T> = Result<T, AppError>;

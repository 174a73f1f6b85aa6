//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use maxai_types::error::{AccountError, QueryError};

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Registration, login, and session errors.
    Account(AccountError),
    /// Query submission and history errors.
    Query(QueryError),
    /// Missing or unknown session token.
    Unauthorized(String),
    /// Authenticated, but not allowed.
    Forbidden(String),
}

impl From<AccountError> for AppError {
    fn from(e: AccountError) -> Self {
        AppError::Account(e)
    }
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::Query(e)
    }
}

impl AppError {
    /// Status, machine-readable code, and user-facing message.
    pub fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Account(AccountError::UsernameTaken(name)) => (
                StatusCode::CONFLICT,
                "USERNAME_TAKEN",
                format!("A user with username '{name}' already exists."),
            ),
            AppError::Account(
                e @ (AccountError::InvalidUsername(_) | AccountError::InvalidPassword(_)),
            ) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            AppError::Account(e @ AccountError::InvalidCredentials) => {
                (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS", e.to_string())
            }
            AppError::Account(AccountError::InvalidSession) => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Session is missing or expired. Log in again.".to_string(),
            ),
            AppError::Account(e) => {
                tracing::error!(error = %e, "account operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "ACCOUNT_ERROR", e.to_string())
            }
            AppError::Query(e @ (QueryError::Empty | QueryError::TooLong { .. })) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Query(e) => {
                tracing::error!(error = %e, "query operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "QUERY_ERROR", e.to_string())
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        ApiResponse::error(code, &message).into_response_with_status(status)
    }
}

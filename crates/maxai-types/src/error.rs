use thiserror::Error;

/// Errors from repository operations (used by trait definitions in maxai-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),
}

/// Errors related to user accounts and sessions.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("invalid username: {0}")]
    InvalidUsername(String),

    #[error("invalid password: {0}")]
    InvalidPassword(String),

    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("session is missing or expired")]
    InvalidSession,

    #[error("password hashing failed")]
    Hashing,

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

/// Errors raised while validating a submitted query, before dispatch.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Please enter a search query.")]
    Empty,

    #[error("query is too long ({len} characters, max {max})")]
    TooLong { len: usize, max: usize },

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}

//! User and session repository trait definitions.

use maxai_types::error::RepositoryError;
use maxai_types::history::UserSearchCount;
use maxai_types::user::{Session, User};
use uuid::Uuid;

/// Repository trait for user accounts.
pub trait UserRepository: Send + Sync {
    /// Create a user. Returns `Conflict` if the username is taken.
    fn create_user(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    fn get_user(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    fn get_user_by_username(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// All users, oldest first.
    fn list_users(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<User>, RepositoryError>> + Send;

    /// Delete a user; their history and sessions cascade.
    fn delete_user(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Every user with the number of queries they have recorded.
    fn search_counts(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<UserSearchCount>, RepositoryError>> + Send;

    fn count_users(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}

/// Repository trait for login sessions, keyed by token hash.
pub trait SessionRepository: Send + Sync {
    fn create_session(
        &self,
        session: &Session,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Look up a session by token hash and stamp its last use.
    fn touch_session(
        &self,
        token_hash: &str,
    ) -> impl std::future::Future<Output = Result<Option<Session>, RepositoryError>> + Send;

    /// Delete a session. Returns `true` if it existed.
    fn delete_session(
        &self,
        token_hash: &str,
    ) -> impl std::future::Future<Output = Result<bool, RepositoryError>> + Send;
}

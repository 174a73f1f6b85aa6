//! History repository trait definition.
//!
//! Defines the storage interface for per-user search history. The
//! infrastructure layer (maxai-infra) implements it with SQLite.

use maxai_types::error::RepositoryError;
use maxai_types::history::{HistoryWithUser, SearchHistoryEntry};
use uuid::Uuid;

/// Repository trait for search history persistence.
///
/// Entries are append-only. Every listing is most-recent-first.
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait HistoryRepository: Send + Sync {
    /// Record one submitted query.
    fn record(
        &self,
        entry: &SearchHistoryEntry,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// List a user's entries, newest first.
    fn list_recent(
        &self,
        user_id: &Uuid,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<SearchHistoryEntry>, RepositoryError>> + Send;

    /// Delete every entry owned by a user. Returns the number deleted.
    fn clear(
        &self,
        user_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Latest entries across all users, joined with usernames.
    fn list_all_recent(
        &self,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<HistoryWithUser>, RepositoryError>> + Send;

    /// Total number of recorded queries.
    fn count(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}

//! SQLite search history repository implementation.
//!
//! Implements `HistoryRepository` from `maxai-core`. Listings order by
//! `created_at DESC, id DESC`; ids are UUIDv7, so entries recorded within
//! the same microsecond still come back newest first.

use maxai_core::repository::history::HistoryRepository;
use maxai_types::error::RepositoryError;
use maxai_types::history::{HistoryWithUser, SearchHistoryEntry};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_uuid, query_error};

/// SQLite-backed implementation of `HistoryRepository`.
#[derive(Clone)]
pub struct SqliteHistoryRepository {
    pool: DatabasePool,
}

impl SqliteHistoryRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain SearchHistoryEntry.
struct HistoryRow {
    id: String,
    user_id: String,
    query: String,
    created_at: String,
}

impl HistoryRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            query: row.try_get("query")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_entry(self) -> Result<SearchHistoryEntry, RepositoryError> {
        Ok(SearchHistoryEntry {
            id: parse_uuid(&self.id)?,
            user_id: parse_uuid(&self.user_id)?,
            query: self.query,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

fn map_entry(row: &sqlx::sqlite::SqliteRow) -> Result<SearchHistoryEntry, RepositoryError> {
    HistoryRow::from_row(row).map_err(query_error)?.into_entry()
}

impl HistoryRepository for SqliteHistoryRepository {
    async fn record(&self, entry: &SearchHistoryEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO search_history (id, user_id, query, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(entry.id.to_string())
        .bind(entry.user_id.to_string())
        .bind(&entry.query)
        .bind(format_datetime(&entry.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        Ok(())
    }

    async fn list_recent(
        &self,
        user_id: &Uuid,
        limit: u32,
    ) -> Result<Vec<SearchHistoryEntry>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, user_id, query, created_at FROM search_history
             WHERE user_id = ?
             ORDER BY created_at DESC, id DESC
             LIMIT ?",
        )
        .bind(user_id.to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        rows.iter().map(map_entry).collect()
    }

    async fn clear(&self, user_id: &Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM search_history WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected())
    }

    async fn list_all_recent(&self, limit: u32) -> Result<Vec<HistoryWithUser>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT h.id, h.user_id, h.query, h.created_at, u.username
             FROM search_history h
             JOIN users u ON u.id = h.user_id
             ORDER BY h.created_at DESC, h.id DESC
             LIMIT ?",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        rows.iter()
            .map(|row| {
                Ok(HistoryWithUser {
                    entry: map_entry(row)?,
                    username: row.try_get("username").map_err(query_error)?,
                })
            })
            .collect()
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM search_history")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(query_error)?;
        Ok(count.max(0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::test_support::test_pool;
    use crate::sqlite::user::SqliteUserRepository;
    use crate::sqlite::user::test_support::insert_user;

    async fn setup() -> (SqliteUserRepository, SqliteHistoryRepository) {
        let pool = test_pool().await;
        (
            SqliteUserRepository::new(pool.clone()),
            SqliteHistoryRepository::new(pool),
        )
    }

    #[tokio::test]
    async fn test_record_and_list_most_recent_first() {
        let (users, history) = setup().await;
        let user = insert_user(&users, "lilo").await;

        for q in ["first", "second", "third"] {
            history
                .record(&SearchHistoryEntry::new(user.id, q))
                .await
                .unwrap();
        }

        let entries = history.list_recent(&user.id, 10).await.unwrap();
        let queries: Vec<&str> = entries.iter().map(|e| e.query.as_str()).collect();
        assert_eq!(queries, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn test_list_recent_respects_limit() {
        let (users, history) = setup().await;
        let user = insert_user(&users, "nani").await;
        for i in 0..15 {
            history
                .record(&SearchHistoryEntry::new(user.id, format!("q{i}")))
                .await
                .unwrap();
        }

        let entries = history.list_recent(&user.id, 10).await.unwrap();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].query, "q14");
        assert_eq!(entries[9].query, "q5");
    }

    #[tokio::test]
    async fn test_query_text_is_stored_verbatim() {
        let (users, history) = setup().await;
        let user = insert_user(&users, "stitch").await;
        let raw = "  Play Café Del Mar ON YOUTUBE 🌺 ";
        history
            .record(&SearchHistoryEntry::new(user.id, raw))
            .await
            .unwrap();
        let entries = history.list_recent(&user.id, 1).await.unwrap();
        assert_eq!(entries[0].query, raw);
    }

    #[tokio::test]
    async fn test_clear_only_owner() {
        let (users, history) = setup().await;
        let lilo = insert_user(&users, "lilo").await;
        let nani = insert_user(&users, "nani").await;
        history.record(&SearchHistoryEntry::new(lilo.id, "a")).await.unwrap();
        history.record(&SearchHistoryEntry::new(lilo.id, "b")).await.unwrap();
        history.record(&SearchHistoryEntry::new(nani.id, "c")).await.unwrap();

        assert_eq!(history.clear(&lilo.id).await.unwrap(), 2);
        assert!(history.list_recent(&lilo.id, 10).await.unwrap().is_empty());
        assert_eq!(history.list_recent(&nani.id, 10).await.unwrap().len(), 1);
        assert_eq!(history.clear(&lilo.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_all_recent_joins_usernames() {
        let (users, history) = setup().await;
        let lilo = insert_user(&users, "lilo").await;
        let nani = insert_user(&users, "nani").await;
        history.record(&SearchHistoryEntry::new(lilo.id, "older")).await.unwrap();
        history.record(&SearchHistoryEntry::new(nani.id, "newer")).await.unwrap();

        let all = history.list_all_recent(50).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].username, "nani");
        assert_eq!(all[0].entry.query, "newer");
        assert_eq!(all[1].username, "lilo");
        assert_eq!(history.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_record_requires_existing_user() {
        let (_, history) = setup().await;
        let err = history
            .record(&SearchHistoryEntry::new(Uuid::now_v7(), "orphan"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Query(_)));
    }
}

//! SQLite session repository implementation.
//!
//! Implements `SessionRepository` from `maxai-core`. Rows are keyed by the
//! SHA-256 hash of the bearer token; the plaintext token is never stored.

use chrono::Utc;
use maxai_core::repository::user::SessionRepository;
use maxai_types::error::RepositoryError;
use maxai_types::user::Session;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_uuid, query_error};

/// SQLite-backed implementation of `SessionRepository`.
#[derive(Clone)]
pub struct SqliteSessionRepository {
    pool: DatabasePool,
}

impl SqliteSessionRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn map_session(row: &sqlx::sqlite::SqliteRow) -> Result<Session, RepositoryError> {
    let id: String = row.try_get("id").map_err(query_error)?;
    let user_id: String = row.try_get("user_id").map_err(query_error)?;
    let created_at: String = row.try_get("created_at").map_err(query_error)?;
    let last_used_at: Option<String> = row.try_get("last_used_at").map_err(query_error)?;

    Ok(Session {
        id: parse_uuid(&id)?,
        user_id: parse_uuid(&user_id)?,
        token_hash: row.try_get("token_hash").map_err(query_error)?,
        created_at: parse_datetime(&created_at)?,
        last_used_at: last_used_at.as_deref().map(parse_datetime).transpose()?,
    })
}

impl SessionRepository for SqliteSessionRepository {
    async fn create_session(&self, session: &Session) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO sessions (id, user_id, token_hash, created_at, last_used_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(session.id.to_string())
        .bind(session.user_id.to_string())
        .bind(&session.token_hash)
        .bind(format_datetime(&session.created_at))
        .bind(session.last_used_at.as_ref().map(format_datetime))
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        Ok(())
    }

    async fn touch_session(&self, token_hash: &str) -> Result<Option<Session>, RepositoryError> {
        let row = sqlx::query(
            "UPDATE sessions SET last_used_at = ? WHERE token_hash = ?
             RETURNING id, user_id, token_hash, created_at, last_used_at",
        )
        .bind(format_datetime(&Utc::now()))
        .bind(token_hash)
        .fetch_optional(&self.pool.writer)
        .await
        .map_err(query_error)?;

        row.as_ref().map(map_session).transpose()
    }

    async fn delete_session(&self, token_hash: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM sessions WHERE token_hash = ?")
            .bind(token_hash)
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected() > 0)
    }
}

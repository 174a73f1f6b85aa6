//! SQLite user repository implementation.
//!
//! Implements `UserRepository` from `maxai-core` using sqlx with split read/write pools.

use maxai_core::repository::user::UserRepository;
use maxai_types::error::RepositoryError;
use maxai_types::history::UserSearchCount;
use maxai_types::user::User;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_uuid, query_error};

/// SQLite-backed implementation of `UserRepository`.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain User.
struct UserRow {
    id: String,
    username: String,
    password_hash: String,
    is_superuser: bool,
    created_at: String,
}

impl UserRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            is_superuser: row.try_get("is_superuser")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_user(self) -> Result<User, RepositoryError> {
        Ok(User {
            id: parse_uuid(&self.id)?,
            username: self.username,
            password_hash: self.password_hash,
            is_superuser: self.is_superuser,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

fn map_user(row: &sqlx::sqlite::SqliteRow) -> Result<User, RepositoryError> {
    UserRow::from_row(row).map_err(query_error)?.into_user()
}

impl UserRepository for SqliteUserRepository {
    async fn create_user(&self, user: &User) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO users (id, username, password_hash, is_superuser, created_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.is_superuser)
        .bind(format_datetime(&user.created_at))
        .execute(&self.pool.writer)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.message().contains("UNIQUE") => {
                Err(RepositoryError::Conflict(format!(
                    "username '{}' already exists",
                    user.username
                )))
            }
            Err(e) => Err(query_error(e)),
        }
    }

    async fn get_user(&self, id: &Uuid) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref().map(map_user).transpose()
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.as_ref().map(map_user).transpose()
    }

    async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM users ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(query_error)?;

        rows.iter().map(map_user).collect()
    }

    async fn delete_user(&self, id: &Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn search_counts(&self) -> Result<Vec<UserSearchCount>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT u.id, u.username, COUNT(h.id) AS search_count
             FROM users u
             LEFT JOIN search_history h ON h.user_id = u.id
             GROUP BY u.id, u.username
             ORDER BY search_count DESC, u.username ASC",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(query_error)?;

        rows.iter()
            .map(|row| {
                let id: String = row.try_get("id").map_err(query_error)?;
                let count: i64 = row.try_get("search_count").map_err(query_error)?;
                Ok(UserSearchCount {
                    user_id: parse_uuid(&id)?,
                    username: row.try_get("username").map_err(query_error)?,
                    search_count: count.max(0) as u64,
                })
            })
            .collect()
    }

    async fn count_users(&self) -> Result<u64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(query_error)?;
        Ok(count.max(0) as u64)
    }
}

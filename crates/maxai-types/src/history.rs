//! Search history types.
//!
//! One [`SearchHistoryEntry`] is recorded for every submitted query. Entries
//! are immutable and only ever removed in bulk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single recorded query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHistoryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    /// The query exactly as the user typed it (not normalized).
    pub query: String,
    pub created_at: DateTime<Utc>,
}

impl SearchHistoryEntry {
    /// Create a new entry stamped with the current time.
    pub fn new(user_id: Uuid, query: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            query: query.into(),
            created_at: Utc::now(),
        }
    }
}

/// A history entry joined with the owning username, for the admin view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryWithUser {
    #[serde(flatten)]
    pub entry: SearchHistoryEntry,
    pub username: String,
}

/// Per-user search count for the admin view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSearchCount {
    pub user_id: Uuid,
    pub username: String,
    pub search_count: u64,
}

/// Totals and recent activity across all users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboard {
    pub total_users: u64,
    pub total_searches: u64,
    pub user_counts: Vec<UserSearchCount>,
    pub recent_searches: Vec<HistoryWithUser>,
}

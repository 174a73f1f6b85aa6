//! Query submission use case.
//!
//! [`QueryService::submit`] is the whole request flow for one user query:
//! validate, classify, record history, then act on the dispatch result by
//! calling the chat, search, and summary collaborators as needed.

use maxai_types::dispatch::DispatchResult;
use maxai_types::error::QueryError;
use maxai_types::history::{AdminDashboard, SearchHistoryEntry};
use maxai_types::query::QueryOutcome;
use maxai_types::search::SearchMode;
use tracing::{debug, info};
use uuid::Uuid;

use crate::assistant::Assistant;
use crate::dispatch::Dispatcher;
use crate::repository::history::HistoryRepository;
use crate::repository::user::UserRepository;
use crate::search::{SearchProvider, SearchService};

/// Longest accepted query, in characters.
pub const MAX_QUERY_LEN: usize = 500;

/// Acknowledgement for starting a new chat. Chats carry no server state.
pub const NEW_CHAT_MESSAGE: &str = "Started a new chat!";

/// How many history rows each listing returns.
#[derive(Debug, Clone, Copy)]
pub struct HistoryLimits {
    pub recent: u32,
    pub admin_recent: u32,
}

impl Default for HistoryLimits {
    fn default() -> Self {
        Self {
            recent: 10,
            admin_recent: 50,
        }
    }
}

/// Check a raw query before anything else touches it.
pub fn validate_query(raw: &str) -> Result<(), QueryError> {
    if raw.trim().is_empty() {
        return Err(QueryError::Empty);
    }
    let len = raw.chars().count();
    if len > MAX_QUERY_LEN {
        return Err(QueryError::TooLong {
            len,
            max: MAX_QUERY_LEN,
        });
    }
    Ok(())
}

/// Service orchestrating query dispatch and per-user history.
///
/// Generic over the history repository and search backend; the chat
/// collaborator is type-erased inside [`Assistant`].
pub struct QueryService<H: HistoryRepository, S: SearchProvider> {
    history: H,
    dispatcher: Dispatcher,
    assistant: Assistant,
    search: SearchService<S>,
    limits: HistoryLimits,
}

impl<H: HistoryRepository, S: SearchProvider> QueryService<H, S> {
    pub fn new(
        history: H,
        dispatcher: Dispatcher,
        assistant: Assistant,
        search: SearchService<S>,
        limits: HistoryLimits,
    ) -> Self {
        Self {
            history,
            dispatcher,
            assistant,
            search,
            limits,
        }
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Handle one submitted query for a user.
    ///
    /// Exactly one history entry is recorded for every query that passes
    /// validation, whatever it dispatches to. Collaborator failures never
    /// surface here; only validation and storage errors do.
    pub async fn submit(
        &self,
        user_id: &Uuid,
        raw_query: &str,
        mode: SearchMode,
    ) -> Result<QueryOutcome, QueryError> {
        validate_query(raw_query)?;

        let (rule, result) = self.dispatcher.explain(raw_query);
        debug!(rule, result = %result, "query classified");

        self.history
            .record(&SearchHistoryEntry::new(*user_id, raw_query))
            .await?;

        let query = raw_query.to_string();
        let kind = result.kind();
        let (outcome, fallback) = match result {
            DispatchResult::Chat => {
                let reply = self.assistant.chat_reply(raw_query).await;
                let fallback = reply.fallback;
                (QueryOutcome::Chat { query, reply }, fallback)
            }
            DispatchResult::SpecialContent(tag) => {
                (QueryOutcome::SpecialContent { query, tag }, false)
            }
            DispatchResult::Redirect(url) => (QueryOutcome::Redirect { query, url }, false),
            DispatchResult::FallThroughToSearch => {
                let results = self.search.search(raw_query, mode).await;
                let summary = self.assistant.summarize(raw_query).await;
                let fallback = summary.fallback;
                (
                    QueryOutcome::Search {
                        query,
                        mode,
                        results,
                        summary,
                    },
                    fallback,
                )
            }
        };

        info!(user_id = %user_id, kind, fallback, "query handled");
        Ok(outcome)
    }

    /// A user's most recent queries, newest first.
    pub async fn recent_history(
        &self,
        user_id: &Uuid,
    ) -> Result<Vec<SearchHistoryEntry>, QueryError> {
        Ok(self
            .history
            .list_recent(user_id, self.limits.recent)
            .await?)
    }

    /// Delete a user's whole history. Returns the number of entries removed.
    pub async fn clear_history(&self, user_id: &Uuid) -> Result<u64, QueryError> {
        let deleted = self.history.clear(user_id).await?;
        info!(user_id = %user_id, deleted, "history cleared");
        Ok(deleted)
    }

    pub fn new_chat(&self) -> &'static str {
        NEW_CHAT_MESSAGE
    }

    /// Totals, per-user counts, and the latest searches across all users.
    pub async fn dashboard<U: UserRepository>(
        &self,
        users: &U,
    ) -> Result<AdminDashboard, QueryError> {
        Ok(AdminDashboard {
            total_users: users.count_users().await?,
            total_searches: self.history.count().await?,
            user_counts: users.search_counts().await?,
            recent_searches: self
                .history
                .list_all_recent(self.limits.admin_recent)
                .await?,
        })
    }
}

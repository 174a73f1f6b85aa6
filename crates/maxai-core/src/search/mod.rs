//! Web and image search collaborator.
//!
//! [`SearchProvider`] is the port the infrastructure layer implements
//! (Google Custom Search). [`SearchService`] wraps a provider so that a
//! failed search becomes an empty result set instead of a failed request.

use maxai_types::search::{SearchError, SearchMode, SearchResults};
use tracing::{debug, warn};

/// Trait for search backends.
pub trait SearchProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Run one search. The variant of the returned results matches `mode`.
    fn search(
        &self,
        query: &str,
        mode: SearchMode,
    ) -> impl std::future::Future<Output = Result<SearchResults, SearchError>> + Send;
}

/// Failure-absorbing front for a [`SearchProvider`].
pub struct SearchService<S: SearchProvider> {
    provider: S,
}

impl<S: SearchProvider> SearchService<S> {
    pub fn new(provider: S) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &S {
        &self.provider
    }

    /// Search, returning an empty result set for `mode` on any failure.
    #[tracing::instrument(name = "search", skip(self, query), fields(provider = %self.provider.name()))]
    pub async fn search(&self, query: &str, mode: SearchMode) -> SearchResults {
        match self.provider.search(query, mode).await {
            Ok(results) => {
                debug!(count = results.len(), "search completed");
                results
            }
            Err(err) => {
                warn!(error = %err, "search failed, returning no results");
                SearchResults::empty(mode)
            }
        }
    }
}

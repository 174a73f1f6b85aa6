//! Outcome of a submitted query after dispatch and collaborator calls.

use serde::{Deserialize, Serialize};

use crate::search::{SearchMode, SearchResults};

/// Text produced by the chat or summary collaborator.
///
/// Always carries content: when the collaborator failed, `text` holds the
/// canned fallback and `fallback` is set. Callers treat both the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

impl Reply {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fallback: false,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fallback: true,
        }
    }
}

/// What the caller shows the user for one submitted query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryOutcome {
    Chat {
        query: String,
        reply: Reply,
    },
    SpecialContent {
        query: String,
        tag: String,
    },
    Redirect {
        query: String,
        url: String,
    },
    Search {
        query: String,
        mode: SearchMode,
        results: SearchResults,
        summary: Reply,
    },
}

impl QueryOutcome {
    /// The original query text this outcome answers.
    pub fn query(&self) -> &str {
        match self {
            QueryOutcome::Chat { query, .. }
            | QueryOutcome::SpecialContent { query, .. }
            | QueryOutcome::Redirect { query, .. }
            | QueryOutcome::Search { query, .. } => query,
        }
    }
}

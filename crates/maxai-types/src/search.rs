//! Web and image search result types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which search variant to request when a query falls through to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Web,
    Images,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Web => write!(f, "web"),
            SearchMode::Images => write!(f, "images"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "web" => Ok(SearchMode::Web),
            "images" | "image" => Ok(SearchMode::Images),
            other => Err(format!("invalid search mode: '{other}'")),
        }
    }
}

/// One organic web result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebResult {
    pub title: String,
    pub link: String,
    pub thumbnail: Option<String>,
    pub snippet: String,
}

/// One image result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageResult {
    pub title: String,
    pub link: String,
    pub thumbnail: String,
    pub image_url: String,
    pub context_link: String,
    pub display_link: String,
}

/// Results of a search, shaped by the requested mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "items", rename_all = "lowercase")]
pub enum SearchResults {
    Web(Vec<WebResult>),
    Images(Vec<ImageResult>),
}

impl SearchResults {
    /// An empty result set for the given mode.
    pub fn empty(mode: SearchMode) -> Self {
        match mode {
            SearchMode::Web => SearchResults::Web(Vec::new()),
            SearchMode::Images => SearchResults::Images(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SearchResults::Web(items) => items.len(),
            SearchResults::Images(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Errors from search provider operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search provider not configured: {0}")]
    NotConfigured(String),

    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

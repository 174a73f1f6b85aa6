//! Query dispatch outcome.
//!
//! A [`DispatchResult`] is the tagged result of classifying one user query.
//! It is produced fresh for every request and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a submitted query should be handled.
///
/// Serialized adjacently tagged so the payload-carrying variants stay
/// readable on the wire:
/// `{"kind":"redirect","value":"https://www.youtube.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DispatchResult {
    /// Ask the chat collaborator for a conversational reply.
    Chat,
    /// Show reserved in-page content identified by the tag.
    SpecialContent(String),
    /// Send the user to the given URL.
    Redirect(String),
    /// Treat the query as a literal web or image search.
    FallThroughToSearch,
}

impl DispatchResult {
    /// Short label used in logs and metrics fields.
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchResult::Chat => "chat",
            DispatchResult::SpecialContent(_) => "special_content",
            DispatchResult::Redirect(_) => "redirect",
            DispatchResult::FallThroughToSearch => "fall_through_to_search",
        }
    }
}

impl fmt::Display for DispatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchResult::Chat => write!(f, "chat"),
            DispatchResult::SpecialContent(tag) => write!(f, "special content '{tag}'"),
            DispatchResult::Redirect(url) => write!(f, "redirect to {url}"),
            DispatchResult::FallThroughToSearch => write!(f, "search"),
        }
    }
}

//! Conversational reply and search summary generation.
//!
//! [`Assistant`] is the boundary to the chat-completion collaborator. Its
//! methods never fail: any provider error is logged and replaced with a
//! canned fallback [`Reply`], so the rest of the request flow has no
//! failure branch for these calls.

use maxai_types::config::LlmConfig;
use maxai_types::llm::{CompletionRequest, LlmError, Message};
use maxai_types::query::Reply;
use tracing::warn;

use crate::llm::box_provider::BoxLlmProvider;

/// Persona for conversational replies.
pub const CHAT_SYSTEM_PROMPT: &str = "You are Max, a friendly and helpful AI assistant with a playful personality like Stitch. Respond in a casual, conversational way with occasional humor. Keep responses concise and engaging.";

/// Instruction prepended to the query for search summaries.
pub const SUMMARY_INSTRUCTION: &str = "Provide a fun, concise summary of this search query in one short paragraph with a touch of personality:";

/// Chat reply when the provider answered with a non-success status.
pub const CHAT_STATUS_FALLBACK: &str =
    "Ohana means family! 🌺 I'm having a little trouble connecting right now. Try again?";

/// Chat reply for every other failure.
pub const CHAT_ERROR_FALLBACK: &str =
    "Aloha! 🌺 Max here! I'm currently experiencing some cosmic interference. Try again in a moment!";

/// Summary text for any failure.
pub const SUMMARY_FALLBACK: &str =
    "Let me help you explore this through the search results below! 🌟";

/// Sampling settings for the two request kinds.
#[derive(Debug, Clone)]
pub struct AssistantSettings {
    pub model: String,
    pub chat_temperature: f64,
    pub chat_max_tokens: u32,
    pub summary_temperature: f64,
    pub summary_max_tokens: u32,
}

impl From<&LlmConfig> for AssistantSettings {
    fn from(config: &LlmConfig) -> Self {
        Self {
            model: config.model.clone(),
            chat_temperature: config.chat_temperature,
            chat_max_tokens: config.chat_max_tokens,
            summary_temperature: config.summary_temperature,
            summary_max_tokens: config.summary_max_tokens,
        }
    }
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self::from(&LlmConfig::default())
    }
}

pub struct Assistant {
    provider: BoxLlmProvider,
    settings: AssistantSettings,
}

impl Assistant {
    pub fn new(provider: BoxLlmProvider, settings: AssistantSettings) -> Self {
        Self { provider, settings }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Conversational reply to the user's original message.
    #[tracing::instrument(name = "chat_reply", skip_all, fields(provider = %self.provider.name()))]
    pub async fn chat_reply(&self, message: &str) -> Reply {
        let request = self.chat_request(message);
        match self.complete_text(&request).await {
            Ok(text) => Reply::generated(text),
            Err(err @ LlmError::Status { .. }) => {
                warn!(error = %err, "chat provider returned an error status");
                Reply::fallback(CHAT_STATUS_FALLBACK)
            }
            Err(err) => {
                warn!(error = %err, "chat provider request failed");
                Reply::fallback(CHAT_ERROR_FALLBACK)
            }
        }
    }

    /// Short summary for a query that fell through to search.
    #[tracing::instrument(name = "search_summary", skip_all, fields(provider = %self.provider.name()))]
    pub async fn summarize(&self, query: &str) -> Reply {
        let request = self.summary_request(query);
        match self.complete_text(&request).await {
            Ok(text) => Reply::generated(text),
            Err(err) => {
                warn!(error = %err, "summary provider request failed");
                Reply::fallback(SUMMARY_FALLBACK)
            }
        }
    }

    fn chat_request(&self, message: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![Message::user(message)],
            system: Some(CHAT_SYSTEM_PROMPT.to_string()),
            max_tokens: self.settings.chat_max_tokens,
            temperature: Some(self.settings.chat_temperature),
        }
    }

    fn summary_request(&self, query: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![Message::user(format!("{SUMMARY_INSTRUCTION}\n\n{query}"))],
            system: None,
            max_tokens: self.settings.summary_max_tokens,
            temperature: Some(self.settings.summary_temperature),
        }
    }

    /// Completion text, passed through untouched when it has any
    /// non-whitespace content. A blank completion is reported as
    /// [`LlmError::EmptyResponse`], so callers show their fallback rather
    /// than an empty reply.
    async fn complete_text(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let response = self.provider.complete(request).await?;
        if response.content.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(response.content)
    }
}

//! LlmProvider trait definition.
//!
//! This is the abstraction the chat-completion collaborator implements.
//! Uses RPITIT for `complete`; see [`super::box_provider`] for the
//! object-safe wrapper.

use maxai_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion backends.
///
/// Implementations live in maxai-infra (e.g., `GroqProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "groq").
    fn name(&self) -> &str;

    /// The model used when a request leaves `model` empty.
    fn default_model(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}

//! Chat-completion provider implementations.
//!
//! Contains the concrete [`LlmProvider`](maxai_core::llm::provider::LlmProvider)
//! used in production and a factory that builds it from configuration.

pub mod groq;

use secrecy::SecretString;

use maxai_core::llm::box_provider::BoxLlmProvider;
use maxai_types::config::LlmConfig;
use maxai_types::llm::LlmError;

use self::groq::GroqProvider;

/// Environment variable holding the chat-completion API key.
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Create a [`BoxLlmProvider`] from configuration and an optional API key.
///
/// A missing key is not an error here; it is logged once and every
/// completion then fails, which the assistant turns into a fallback reply.
pub fn create_provider(
    config: &LlmConfig,
    api_key: Option<SecretString>,
) -> Result<BoxLlmProvider, LlmError> {
    if api_key.is_none() {
        tracing::warn!("{GROQ_API_KEY_ENV} is not set; chat replies and summaries will use fallbacks");
    }
    let provider = GroqProvider::new(config, api_key)?;
    Ok(BoxLlmProvider::new(provider))
}

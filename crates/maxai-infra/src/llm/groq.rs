//! GroqProvider -- concrete [`LlmProvider`] for Groq's OpenAI-compatible API.
//!
//! Sends `POST {base_url}/chat/completions` with bearer authentication and
//! reads the first choice's message content. Any OpenAI-compatible endpoint
//! works by changing `base_url`.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use maxai_core::llm::provider::LlmProvider;
use maxai_types::config::LlmConfig;
use maxai_types::llm::{CompletionRequest, CompletionResponse, LlmError, MessageRole, Usage};

/// Wire shape of one chat message.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Wire shape of a chat-completions request body.
#[derive(Debug, Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    id: String,
    #[serde(default)]
    model: String,
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

/// Groq chat-completion provider.
///
/// Built even when no API key is configured; every call then fails with
/// [`LlmError::AuthenticationFailed`] and callers fall back.
pub struct GroqProvider {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
}

// GroqProvider intentionally does NOT derive Debug; it holds the API key.

impl GroqProvider {
    pub fn new(config: &LlmConfig, api_key: Option<SecretString>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Convert a generic [`CompletionRequest`] into the wire body. The
    /// system prompt, when present, becomes the first message.
    fn build_body<'a>(&'a self, request: &'a CompletionRequest) -> ChatCompletionBody<'a> {
        let mut messages = Vec::with_capacity(request.messages.len() + 1);
        if let Some(system) = request.system.as_deref() {
            messages.push(ChatMessage {
                role: "system",
                content: system,
            });
        }
        for message in &request.messages {
            messages.push(ChatMessage {
                role: match message.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                },
                content: &message.content,
            });
        }

        ChatCompletionBody {
            model: if request.model.is_empty() {
                &self.model
            } else {
                &request.model
            },
            messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

/// Map a successful response body to a [`CompletionResponse`].
fn parse_response(body: &str) -> Result<CompletionResponse, LlmError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(LlmError::EmptyResponse)?;

    let usage = parsed
        .usage
        .map(|u| Usage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        })
        .unwrap_or_default();

    Ok(CompletionResponse {
        id: parsed.id,
        content,
        model: parsed.model,
        usage,
    })
}

impl LlmProvider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    fn default_model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let api_key = self.api_key.as_ref().ok_or(LlmError::AuthenticationFailed)?;
        let body = self.build_body(request);

        let response = self
            .client
            .post(self.url())
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let completion = parse_response(&text)?;
        tracing::debug!(
            model = %completion.model,
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            "completion received"
        );
        Ok(completion)
    }
}

//! Global configuration types for Max AI.
//!
//! `GlobalConfig` represents the top-level `config.toml` in the data
//! directory. Every section and field has a default, so an empty or missing
//! file yields a working configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub search: SearchConfig,
    pub history: HistoryConfig,
    pub dispatch: DispatchOverrides,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Chat-completion collaborator settings (OpenAI-compatible endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub chat_temperature: f64,
    pub chat_max_tokens: u32,
    pub summary_temperature: f64,
    pub summary_max_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            timeout_secs: 30,
            chat_temperature: 0.7,
            chat_max_tokens: 1024,
            summary_temperature: 0.3,
            summary_max_tokens: 512,
        }
    }
}

/// Search collaborator settings (Google Custom Search JSON API).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub base_url: String,
    pub web_results: u8,
    pub image_results: u8,
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.googleapis.com/customsearch/v1".to_string(),
            web_results: 5,
            image_results: 8,
            timeout_secs: 30,
        }
    }
}

/// How much history the user and admin views show.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub recent_limit: u32,
    pub admin_recent_limit: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            recent_limit: 10,
            admin_recent_limit: 50,
        }
    }
}

/// Operator additions merged over the built-in dispatch tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchOverrides {
    /// Extra exact-match phrases mapped to absolute URLs.
    pub app_commands: BTreeMap<String, String>,
    /// Extra full-string greeting phrases.
    pub greetings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert_eq!(config.search.web_results, 5);
        assert_eq!(config.search.image_results, 8);
        assert_eq!(config.history.recent_limit, 10);
        assert!(config.dispatch.app_commands.is_empty());
    }

    #[test]
    fn test_global_config_deserialize_empty() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.llm.chat_max_tokens, 1024);
        assert_eq!(config.llm.summary_max_tokens, 512);
    }

    #[test]
    fn test_global_config_deserialize_partial_sections() {
        let toml_str = r#"
[server]
port = 9090

[llm]
model = "llama-3.3-70b-versatile"

[dispatch]
greetings = ["yo max"]

[dispatch.app_commands]
"open docs" = "https://docs.rs"
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.llm.model, "llama-3.3-70b-versatile");
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(config.dispatch.greetings, vec!["yo max".to_string()]);
        assert_eq!(
            config.dispatch.app_commands.get("open docs").map(String::as_str),
            Some("https://docs.rs")
        );
    }
}

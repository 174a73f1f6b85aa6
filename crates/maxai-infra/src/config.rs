//! Global configuration loader for Max AI.
//!
//! Reads `config.toml` from the data directory (`~/.maxai/` in production)
//! and deserializes it into [`GlobalConfig`]. Falls back to defaults when
//! the file is missing or malformed. API keys come from the environment
//! only and are wrapped in [`SecretString`] as soon as they are read.

use std::path::Path;

use maxai_types::config::GlobalConfig;
use secrecy::SecretString;

use crate::filesystem::config_path;
use crate::llm::GROQ_API_KEY_ENV;
use crate::search::{GOOGLE_API_KEY_ENV, GOOGLE_CSE_ID_ENV};

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Collaborator credentials read from the environment.
pub struct ApiKeys {
    pub groq_api_key: Option<SecretString>,
    pub google_api_key: Option<SecretString>,
    pub google_cse_id: Option<String>,
}

impl ApiKeys {
    /// Read `GROQ_API_KEY`, `GOOGLE_API_KEY` and `GOOGLE_CSE_ID`.
    /// Unset, empty, and non-Unicode values all count as missing.
    pub fn from_env() -> Self {
        Self {
            groq_api_key: env_value(GROQ_API_KEY_ENV).map(SecretString::from),
            google_api_key: env_value(GOOGLE_API_KEY_ENV).map(SecretString::from),
            google_cse_id: env_value(GOOGLE_CSE_ID_ENV),
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//! Phrase and URL tables the dispatch rules match against.
//!
//! The built-in tables are plain data, built once per process and shared
//! read-only. Operators can merge extra app commands and greetings over them
//! through `[dispatch]` in `config.toml`.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use maxai_types::config::DispatchOverrides;

/// Exact phrase to destination URL.
pub const APP_COMMANDS: &[(&str, &str)] = &[
    ("open youtube", "https://www.youtube.com"),
    ("open netflix", "https://www.netflix.com"),
    ("open spotify", "https://open.spotify.com"),
    ("open google", "https://www.google.com"),
    ("open github", "https://www.github.com"),
    ("open twitter", "https://twitter.com"),
    ("open facebook", "https://facebook.com"),
    ("open instagram", "https://instagram.com"),
    ("open amazon", "https://amazon.com"),
    ("open prime video", "https://primevideo.com"),
    ("open hotstar", "https://hotstar.com"),
    ("open linkedin", "https://linkedin.com"),
    ("open whatsapp", "https://web.whatsapp.com"),
    ("open gmail", "https://gmail.com"),
    ("open drive", "https://drive.google.com"),
    ("open maps", "https://maps.google.com"),
    ("open calendar", "https://calendar.google.com"),
    ("open chatgpt", "https://chatgpt.com"),
];

/// Tag shown in place of a redirect for the special-content aliases.
pub const CHIKAICO_TAG: &str = "chikaico";

/// Alias to content tag.
pub const SPECIAL_CONTENT: &[(&str, &str)] = &[
    ("chikaico", CHIKAICO_TAG),
    ("show chikaico", CHIKAICO_TAG),
    ("chika ico", CHIKAICO_TAG),
];

/// Full-string phrases that get a conversational reply.
pub const GREETINGS: &[&str] = &[
    "hello",
    "hi max",
    "hi",
    "hello max",
    "hey max",
    "hey",
    "max",
    "how are you",
    "aloha",
];

pub const MUSIC_KEYWORDS: &[&str] = &["play", "song", "music"];

pub const MUSIC_PREFIXES: &[&str] = &["play", "play song", "play music", "search for", "find"];

pub const MUSIC_SUFFIX: &str = "on youtube";

/// The percent-encoded title is appended to this.
pub const VIDEO_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

/// Keywords and strip lists for the music/video-search command.
#[derive(Debug, Clone)]
pub struct MusicCommand {
    pub keywords: Vec<String>,
    pub prefixes: Vec<String>,
    pub suffix: String,
    pub search_url: String,
}

impl Default for MusicCommand {
    fn default() -> Self {
        Self {
            keywords: MUSIC_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            prefixes: MUSIC_PREFIXES.iter().map(|s| s.to_string()).collect(),
            suffix: MUSIC_SUFFIX.to_string(),
            search_url: VIDEO_SEARCH_URL.to_string(),
        }
    }
}

/// Every table the dispatch rules consult. Keys are stored normalized
/// (trimmed, lower-cased).
#[derive(Debug, Clone)]
pub struct DispatchTables {
    pub app_commands: HashMap<String, String>,
    pub special_content: HashMap<String, String>,
    pub greetings: HashSet<String>,
    pub music: MusicCommand,
}

static BUILTIN: LazyLock<Arc<DispatchTables>> =
    LazyLock::new(|| Arc::new(DispatchTables::default()));

impl Default for DispatchTables {
    fn default() -> Self {
        Self {
            app_commands: APP_COMMANDS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            special_content: SPECIAL_CONTENT
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            greetings: GREETINGS.iter().map(|s| s.to_string()).collect(),
            music: MusicCommand::default(),
        }
    }
}

impl DispatchTables {
    /// The process-wide built-in tables.
    pub fn builtin() -> Arc<DispatchTables> {
        Arc::clone(&BUILTIN)
    }

    /// Built-in tables with operator additions merged on top.
    ///
    /// Override keys are normalized so they match the way queries are
    /// compared. An override replaces a built-in entry with the same key.
    pub fn with_overrides(overrides: &DispatchOverrides) -> Self {
        let mut tables = Self::default();
        for (phrase, url) in &overrides.app_commands {
            let key = phrase.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            tables.app_commands.insert(key, url.trim().to_string());
        }
        for greeting in &overrides.greetings {
            let key = greeting.trim().to_lowercase();
            if !key.is_empty() {
                tables.greetings.insert(key);
            }
        }
        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_builtin_table_sizes() {
        let tables = DispatchTables::builtin();
        assert_eq!(tables.app_commands.len(), 18);
        assert_eq!(tables.special_content.len(), 3);
        assert_eq!(tables.greetings.len(), 9);
    }

    #[test]
    fn test_special_content_all_map_to_one_tag() {
        let tables = DispatchTables::default();
        assert!(tables.special_content.values().all(|tag| tag == CHIKAICO_TAG));
    }

    #[test]
    fn test_app_command_urls_are_absolute() {
        for (_, url) in APP_COMMANDS {
            assert!(url.starts_with("https://"), "{url} is not absolute");
        }
    }

    #[test]
    fn test_overrides_are_normalized_and_merged() {
        let mut app_commands = BTreeMap::new();
        app_commands.insert("  Open Docs ".to_string(), "https://docs.rs".to_string());
        app_commands.insert("open youtube".to_string(), "https://m.youtube.com".to_string());
        let overrides = DispatchOverrides {
            app_commands,
            greetings: vec!["Yo Max".to_string(), "   ".to_string()],
        };

        let tables = DispatchTables::with_overrides(&overrides);
        assert_eq!(tables.app_commands.len(), 19);
        assert_eq!(
            tables.app_commands.get("open docs").map(String::as_str),
            Some("https://docs.rs")
        );
        assert_eq!(
            tables.app_commands.get("open youtube").map(String::as_str),
            Some("https://m.youtube.com")
        );
        assert!(tables.greetings.contains("yo max"));
        assert_eq!(tables.greetings.len(), 10);
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = DispatchTables::builtin();
        let b = DispatchTables::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }
}

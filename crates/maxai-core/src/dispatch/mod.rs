//! Query classification.
//!
//! [`Dispatcher::classify`] decides, for one free-text query, whether it is a
//! special-content keyword, an app or site command, a music search, a
//! greeting, or a plain search. It is a pure, total function: no I/O, no
//! hidden state, and every string maps to exactly one [`DispatchResult`].
//!
//! Matching is done on a trimmed, lower-cased copy of the query. The
//! original text is never altered; callers keep using it for chat and
//! search.

pub mod rules;
pub mod tables;

use std::sync::Arc;

use maxai_types::config::DispatchOverrides;
use maxai_types::dispatch::DispatchResult;

use self::rules::RULES;
use self::tables::DispatchTables;

/// Classify a query against the built-in tables.
pub fn classify(query: &str) -> DispatchResult {
    Dispatcher::builtin().classify(query)
}

/// Trim surrounding whitespace and lower-case.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Classifier bound to a set of dispatch tables. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tables: Arc<DispatchTables>,
}

impl Dispatcher {
    /// Dispatcher over the shared built-in tables.
    pub fn builtin() -> Self {
        Self {
            tables: DispatchTables::builtin(),
        }
    }

    /// Dispatcher over the built-in tables plus operator overrides.
    pub fn with_overrides(overrides: &DispatchOverrides) -> Self {
        if overrides.app_commands.is_empty() && overrides.greetings.is_empty() {
            return Self::builtin();
        }
        Self::new(DispatchTables::with_overrides(overrides))
    }

    pub fn new(tables: DispatchTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    pub fn tables(&self) -> &DispatchTables {
        &self.tables
    }

    /// Classify a query. First matching rule wins.
    pub fn classify(&self, query: &str) -> DispatchResult {
        self.explain(query).1
    }

    /// Classify a query and report the name of the rule that decided it.
    pub fn explain(&self, query: &str) -> (&'static str, DispatchResult) {
        let normalized = normalize(query);
        for rule in &RULES {
            if let Some(result) = (rule.apply)(&normalized, &self.tables) {
                return (rule.name, result);
            }
        }
        ("search", DispatchResult::FallThroughToSearch)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn redirect(url: &str) -> DispatchResult {
        DispatchResult::Redirect(url.to_string())
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Open YouTube \n"), "open youtube");
        assert_eq!(normalize("HELLO"), "hello");
    }

    #[test]
    fn test_exact_app_command() {
        assert_eq!(classify("open youtube"), redirect("https://www.youtube.com"));
        assert_eq!(classify("open prime video"), redirect("https://primevideo.com"));
    }

    #[test]
    fn test_normalization_invariance() {
        assert_eq!(classify("  Open YouTube  "), classify("open youtube"));
        assert_eq!(classify("\tHELLO\n"), DispatchResult::Chat);
    }

    #[test]
    fn test_special_content_aliases() {
        for alias in ["chikaico", "show chikaico", "chika ico", "  ChikaICO "] {
            assert_eq!(
                classify(alias),
                DispatchResult::SpecialContent("chikaico".to_string()),
                "{alias}"
            );
        }
    }

    #[test]
    fn test_special_content_wins_over_everything() {
        // "show chikaico" would otherwise fall through to search.
        let d = Dispatcher::builtin();
        assert_eq!(d.explain("show chikaico").0, "special_content");
    }

    #[test]
    fn test_go_to_command() {
        assert_eq!(classify("go to example.org"), redirect("https://example.org"));
        assert_eq!(classify("Go To http://intranet.local"), redirect("http://intranet.local"));
        // No validation of the target.
        assert_eq!(classify("go to not a url"), redirect("https://not a url"));
    }

    #[test]
    fn test_go_to_wins_over_music() {
        let d = Dispatcher::builtin();
        let (rule, result) = d.explain("go to play.google.com");
        assert_eq!(rule, "go_to");
        assert_eq!(result, redirect("https://play.google.com"));
    }

    #[test]
    fn test_open_generic_domain() {
        assert_eq!(classify("open reddit"), redirect("https://reddit.com"));
        assert_eq!(classify("open docs.rs"), redirect("https://docs.rs"));
        assert_eq!(classify("open chikaico"), DispatchResult::SpecialContent("chikaico".to_string()));
    }

    #[test]
    fn test_open_with_trailing_words_builds_malformed_url() {
        assert_eq!(
            classify("open netflix please"),
            redirect("https://netflix please.com")
        );
    }

    #[test]
    fn test_open_wins_over_music_keyword() {
        // Contains "play" but starts with "open ".
        assert_eq!(classify("open play store"), redirect("https://play store.com"));
    }

    #[test]
    fn test_music_command() {
        assert_eq!(
            classify("play shape of you on youtube"),
            redirect("https://www.youtube.com/results?search_query=shape%20of%20you")
        );
        assert_eq!(
            classify("Play Song Bohemian Rhapsody"),
            redirect("https://www.youtube.com/results?search_query=song%20bohemian%20rhapsody")
        );
    }

    #[test]
    fn test_music_keyword_without_prefix_keeps_full_phrase() {
        assert_eq!(
            classify("I love music"),
            redirect("https://www.youtube.com/results?search_query=i%20love%20music")
        );
        // Substring match: "display" contains "play".
        assert_eq!(
            classify("display settings"),
            redirect("https://www.youtube.com/results?search_query=display%20settings")
        );
    }

    #[test]
    fn test_bare_music_keyword_falls_through() {
        assert_eq!(classify("play"), DispatchResult::FallThroughToSearch);
        assert_eq!(classify("play on youtube"), DispatchResult::FallThroughToSearch);
    }

    #[test]
    fn test_greetings_require_full_match() {
        assert_eq!(classify("hello"), DispatchResult::Chat);
        assert_eq!(classify("hey max"), DispatchResult::Chat);
        assert_eq!(classify("how are you"), DispatchResult::Chat);
        assert_eq!(classify("hello there"), DispatchResult::FallThroughToSearch);
        assert_eq!(classify("maxwell equations"), DispatchResult::FallThroughToSearch);
    }

    #[test]
    fn test_default_is_search() {
        assert_eq!(
            classify("weather in honolulu"),
            DispatchResult::FallThroughToSearch
        );
    }

    #[test]
    fn test_overrides_extend_tables() {
        let mut app_commands = BTreeMap::new();
        app_commands.insert("open docs".to_string(), "https://docs.rs".to_string());
        let d = Dispatcher::with_overrides(&DispatchOverrides {
            app_commands,
            greetings: vec!["yo max".to_string()],
        });
        assert_eq!(d.classify("Open Docs"), redirect("https://docs.rs"));
        assert_eq!(d.classify("yo max"), DispatchResult::Chat);
        // Built-ins still present.
        assert_eq!(d.classify("open github"), redirect("https://www.github.com"));
    }

    #[test]
    fn test_empty_overrides_share_builtin_tables() {
        let d = Dispatcher::with_overrides(&DispatchOverrides::default());
        assert!(Arc::ptr_eq(&d.tables, &DispatchTables::builtin()));
    }
}

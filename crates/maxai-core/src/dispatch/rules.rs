//! The ordered classification rules.
//!
//! Each rule is a pure function from the normalized query to an optional
//! [`DispatchResult`]. [`RULES`] is evaluated top to bottom and the first
//! rule that returns `Some` decides the outcome. The categories overlap
//! ("open youtube" is both an exact app command and an "open X" command),
//! so the order of this list is part of the dispatch contract.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use maxai_types::dispatch::DispatchResult;

use super::tables::DispatchTables;

/// Bytes kept verbatim in the video-search query parameter: ASCII
/// alphanumerics plus `_ . - ~ /`. Everything else is percent-encoded.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

const GO_TO_PREFIX: &str = "go to ";
const OPEN_PREFIX: &str = "open ";

/// A named classification step.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&str, &DispatchTables) -> Option<DispatchResult>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Classification rules in precedence order. The last rule always matches.
pub const RULES: [Rule; 7] = [
    Rule {
        name: "special_content",
        apply: special_content,
    },
    Rule {
        name: "app_command",
        apply: app_command,
    },
    Rule {
        name: "go_to",
        apply: go_to,
    },
    Rule {
        name: "open",
        apply: open_site,
    },
    Rule {
        name: "music",
        apply: music_search,
    },
    Rule {
        name: "greeting",
        apply: greeting,
    },
    Rule {
        name: "search",
        apply: fall_through,
    },
];

fn special_content(query: &str, tables: &DispatchTables) -> Option<DispatchResult> {
    tables
        .special_content
        .get(query)
        .map(|tag| DispatchResult::SpecialContent(tag.clone()))
}

fn app_command(query: &str, tables: &DispatchTables) -> Option<DispatchResult> {
    tables
        .app_commands
        .get(query)
        .map(|url| DispatchResult::Redirect(url.clone()))
}

/// Everything after the leading "go to " is the target, taken whole.
fn go_to(query: &str, _tables: &DispatchTables) -> Option<DispatchResult> {
    let target = query.strip_prefix(GO_TO_PREFIX)?;
    Some(DispatchResult::Redirect(with_scheme(target)))
}

/// "open X": X is looked up as a whole app-command phrase, then as a
/// special-content alias, and otherwise turned into a bare domain.
fn open_site(query: &str, tables: &DispatchTables) -> Option<DispatchResult> {
    let site = query.strip_prefix(OPEN_PREFIX)?;

    if let Some(url) = tables.app_commands.get(site) {
        return Some(DispatchResult::Redirect(url.clone()));
    }
    if let Some(tag) = tables.special_content.get(site) {
        return Some(DispatchResult::SpecialContent(tag.clone()));
    }

    let domain = if site.contains('.') {
        site.to_string()
    } else {
        format!("{site}.com")
    };
    Some(DispatchResult::Redirect(with_scheme(&domain)))
}

fn music_search(query: &str, tables: &DispatchTables) -> Option<DispatchResult> {
    let music = &tables.music;
    if !music.keywords.iter().any(|k| query.contains(k.as_str())) {
        return None;
    }

    let title = music_title(query, &music.prefixes, &music.suffix);
    if title.is_empty() {
        return None;
    }

    Some(DispatchResult::Redirect(format!(
        "{}{}",
        music.search_url,
        utf8_percent_encode(title, QUERY_ENCODE_SET)
    )))
}

fn greeting(query: &str, tables: &DispatchTables) -> Option<DispatchResult> {
    tables
        .greetings
        .contains(query)
        .then_some(DispatchResult::Chat)
}

fn fall_through(_query: &str, _tables: &DispatchTables) -> Option<DispatchResult> {
    Some(DispatchResult::FallThroughToSearch)
}

/// Strip the first leading prefix in table order (once) and a trailing suffix.
///
/// "play" precedes "play song" in the table, so "play song x" keeps "song x".
pub(crate) fn music_title<'a>(query: &'a str, prefixes: &[String], suffix: &str) -> &'a str {
    let without_prefix = prefixes
        .iter()
        .find_map(|p| query.strip_prefix(p.as_str()))
        .map(str::trim)
        .unwrap_or(query);

    match without_prefix.strip_suffix(suffix) {
        Some(rest) => rest.trim(),
        None => without_prefix,
    }
}

/// Prepend `https://` unless the target already starts with `http`.
fn with_scheme(target: &str) -> String {
    if target.starts_with("http") {
        target.to_string()
    } else {
        format!("https://{target}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::tables::{MUSIC_PREFIXES, MUSIC_SUFFIX};

    fn prefixes() -> Vec<String> {
        MUSIC_PREFIXES
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "special_content",
                "app_command",
                "go_to",
                "open",
                "music",
                "greeting",
                "search"
            ]
        );
    }

    #[test]
    fn test_last_rule_always_matches() {
        let tables = DispatchTables::default();
        let last = RULES[RULES.len() - 1];
        assert_eq!(
            (last.apply)("anything at all", &tables),
            Some(DispatchResult::FallThroughToSearch)
        );
    }

    #[test]
    fn test_with_scheme() {
        assert_eq!(with_scheme("example.org"), "https://example.org");
        assert_eq!(with_scheme("http://example.org"), "http://example.org");
        assert_eq!(with_scheme("https://example.org"), "https://example.org");
    }

    #[test]
    fn test_music_title_first_prefix_in_table_order() {
        let p = prefixes();
        assert_eq!(
            music_title("play song shape of you", &p, MUSIC_SUFFIX),
            "song shape of you"
        );
        assert_eq!(music_title("play music lofi beats", &p, MUSIC_SUFFIX), "music lofi beats");
        assert_eq!(music_title("play despacito", &p, MUSIC_SUFFIX), "despacito");
        assert_eq!(music_title("search for aloha oe", &p, MUSIC_SUFFIX), "aloha oe");
    }

    #[test]
    fn test_music_title_later_prefix_not_chained() {
        let p = prefixes();
        assert_eq!(music_title("play find my song", &p, MUSIC_SUFFIX), "find my song");
    }

    #[test]
    fn test_music_title_prefix_applied_once() {
        let p = prefixes();
        assert_eq!(music_title("play play that song", &p, MUSIC_SUFFIX), "play that song");
    }

    #[test]
    fn test_music_title_suffix() {
        let p = prefixes();
        assert_eq!(
            music_title("play shape of you on youtube", &p, MUSIC_SUFFIX),
            "shape of you"
        );
        assert_eq!(
            music_title("find calm music on youtube", &p, MUSIC_SUFFIX),
            "calm music"
        );
    }

    #[test]
    fn test_music_title_no_prefix_is_noop() {
        let p = prefixes();
        assert_eq!(music_title("i love music", &p, MUSIC_SUFFIX), "i love music");
    }

    #[test]
    fn test_music_title_bare_keyword_is_empty() {
        let p = prefixes();
        assert_eq!(music_title("play", &p, MUSIC_SUFFIX), "");
    }

    #[test]
    fn test_music_search_encodes_title() {
        let tables = DispatchTables::default();
        assert_eq!(
            music_search("play café del mar", &tables),
            Some(DispatchResult::Redirect(
                "https://www.youtube.com/results?search_query=caf%C3%A9%20del%20mar".to_string()
            ))
        );
        assert_eq!(
            music_search("play ac/dc & friends", &tables),
            Some(DispatchResult::Redirect(
                "https://www.youtube.com/results?search_query=ac/dc%20%26%20friends".to_string()
            ))
        );
    }

    #[test]
    fn test_music_search_empty_title_does_not_match() {
        let tables = DispatchTables::default();
        assert_eq!(music_search("play", &tables), None);
        assert_eq!(music_search("play on youtube", &tables), None);
    }

    #[test]
    fn test_go_to_strips_only_the_leading_prefix() {
        let tables = DispatchTables::default();
        // Everything after the first "go to " is the target, repeats included.
        assert_eq!(
            go_to("go to go to kauai.org", &tables),
            Some(DispatchResult::Redirect("https://go to kauai.org".to_string()))
        );
        assert_eq!(
            go_to("go to http://kauai.org", &tables),
            Some(DispatchResult::Redirect("http://kauai.org".to_string()))
        );
        assert_eq!(go_to("let's go to kauai", &tables), None);
    }

    #[test]
    fn test_open_site_lookup_order() {
        let tables = DispatchTables::default();
        // The remainder is looked up in the same phrase table.
        assert_eq!(
            open_site("open open youtube", &tables),
            Some(DispatchResult::Redirect("https://www.youtube.com".to_string()))
        );
        assert_eq!(
            open_site("open chika ico", &tables),
            Some(DispatchResult::SpecialContent("chikaico".to_string()))
        );
        assert_eq!(
            open_site("open docs.rs", &tables),
            Some(DispatchResult::Redirect("https://docs.rs".to_string()))
        );
        assert_eq!(open_site("opened", &tables), None);
    }
}

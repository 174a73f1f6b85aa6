//! Public contract of the query classifier.

use maxai_core::dispatch::rules::RULES;
use maxai_core::dispatch::{Dispatcher, classify};
use maxai_types::dispatch::DispatchResult;
use proptest::prelude::*;

fn redirect(url: &str) -> DispatchResult {
    DispatchResult::Redirect(url.to_string())
}

#[test]
fn known_commands() {
    let cases = [
        ("open youtube", redirect("https://www.youtube.com")),
        ("  Open YouTube  ", redirect("https://www.youtube.com")),
        ("go to example.org", redirect("https://example.org")),
        ("open netflix please", redirect("https://netflix please.com")),
        (
            "play shape of you on youtube",
            redirect("https://www.youtube.com/results?search_query=shape%20of%20you"),
        ),
        ("hello", DispatchResult::Chat),
        ("hello there", DispatchResult::FallThroughToSearch),
        ("chikaico", DispatchResult::SpecialContent("chikaico".to_string())),
        ("show chikaico", DispatchResult::SpecialContent("chikaico".to_string())),
    ];

    for (query, expected) in cases {
        assert_eq!(classify(query), expected, "query: {query:?}");
    }
}

#[test]
fn every_app_command_redirects_to_its_table_url() {
    let dispatcher = Dispatcher::builtin();
    for (phrase, url) in &dispatcher.tables().app_commands {
        assert_eq!(dispatcher.classify(phrase), redirect(url), "{phrase}");
        assert_eq!(
            dispatcher.classify(&phrase.to_uppercase()),
            redirect(url),
            "{phrase} (upper-case)"
        );
    }
}

#[test]
fn edge_inputs_classify_consistently() {
    let inputs = [
        "",
        "   ",
        "\u{0}",
        "open ",
        "go to ",
        "🌺🌺🌺",
        "ΑΛΟΗΑ",
        "play",
        "what is the airspeed velocity of an unladen swallow",
        "open https://example.org/path?q=1",
    ];
    let dispatcher = Dispatcher::builtin();
    for input in inputs {
        let first = dispatcher.classify(input);
        let second = dispatcher.classify(input);
        assert_eq!(first, second, "input: {input:?}");
    }
}

#[test]
fn empty_input_falls_through() {
    // Validation rejects these before dispatch; the classifier still answers.
    assert_eq!(classify(""), DispatchResult::FallThroughToSearch);
    assert_eq!(classify("   "), DispatchResult::FallThroughToSearch);
}

#[test]
fn rule_names_are_exposed_in_order() {
    assert_eq!(RULES.first().map(|r| r.name), Some("special_content"));
    assert_eq!(RULES.last().map(|r| r.name), Some("search"));
}

#[test]
fn dispatch_result_wire_format() {
    let json = serde_json::to_value(classify("open github")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"kind": "redirect", "value": "https://www.github.com"})
    );
    let json = serde_json::to_value(classify("aloha")).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "chat"}));
}

/// Queries that start with a command prefix followed by arbitrary text.
fn command_like() -> impl Strategy<Value = String> {
    let prefix = prop::sample::select(vec![
        "open ", "go to ", "play ", "play song ", "find ", "search for ", "show ", "",
    ]);
    (prefix, "\\PC{0,40}", prop::option::of(Just(" on youtube")))
        .prop_map(|(prefix, rest, suffix)| format!("{prefix}{rest}{}", suffix.unwrap_or("")))
}

proptest! {
    #[test]
    fn classification_is_total_and_idempotent(query in any::<String>()) {
        let dispatcher = Dispatcher::builtin();
        let first = dispatcher.classify(&query);
        prop_assert_eq!(first, dispatcher.classify(&query));
    }

    #[test]
    fn case_and_outer_whitespace_do_not_matter(query in "[ -~\t]{0,64}") {
        let padded = format!("  {}  ", query.to_uppercase());
        prop_assert_eq!(classify(&query), classify(&padded));
    }

    #[test]
    fn redirects_always_carry_a_scheme(query in command_like()) {
        if let DispatchResult::Redirect(url) = classify(&query) {
            prop_assert!(url.starts_with("http"), "{} -> {}", query, url);
        }
    }
}

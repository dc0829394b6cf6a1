//! Representative-card and author resolution scenarios.

use mfq::{Author, AuthorOptions, Collection, get_author, get_plaintext, get_representative_card};
use serde_json::json;

fn load(value: serde_json::Value) -> Collection {
    Collection::from_value(&value).expect("valid document")
}

fn name_of(item: &mfq::Item) -> Option<&str> {
    get_plaintext(item, "name", None)
}

// ============================================================================
// Representative card
// ============================================================================

#[test]
fn test_representative_uid_and_url_match() {
    let doc = load(json!({
        "items": [
            { "type": ["h-card"], "properties": {
                "name": ["Other"], "url": ["https://other.example/"]
            }},
            { "type": ["h-card"], "properties": {
                "name": ["Owner"],
                "uid": ["https://example.com/"],
                "url": ["https://example.com/"]
            }}
        ],
        "rels": {}
    }));

    let card = get_representative_card(&doc, "https://example.com/").expect("tier 1 card");
    assert_eq!(name_of(card), Some("Owner"));
}

#[test]
fn test_representative_rel_me_match() {
    let doc = load(json!({
        "items": [
            { "type": ["h-card"], "properties": {
                "name": ["Nobody"], "url": ["https://nobody.example/"]
            }},
            { "type": ["h-card"], "properties": {
                "name": ["X"], "url": ["https://twitter.com/x"]
            }}
        ],
        "rels": { "me": ["https://twitter.com/x"] }
    }));

    let card = get_representative_card(&doc, "https://example.com/").expect("tier 2 card");
    assert_eq!(name_of(card), Some("X"));
}

#[test]
fn test_representative_sole_url_match() {
    let doc = load(json!({
        "items": [
            { "type": ["h-card"], "properties": {
                "name": ["Only"], "url": ["https://example.com/"]
            }},
            { "type": ["h-card"], "properties": {
                "name": ["Elsewhere"], "url": ["https://elsewhere.example/"]
            }}
        ],
        "rels": {}
    }));

    let card = get_representative_card(&doc, "https://example.com").expect("tier 3 card");
    assert_eq!(name_of(card), Some("Only"));
}

#[test]
fn test_representative_ambiguous_url_match_is_none() {
    let doc = load(json!({
        "items": [
            { "type": ["h-card"], "properties": {
                "name": ["A"], "url": ["https://example.com/"]
            }},
            { "type": ["h-card"], "properties": {
                "name": ["B"], "url": ["https://example.com/"]
            }}
        ],
        "rels": {}
    }));

    assert_eq!(get_representative_card(&doc, "https://example.com/"), None);
}

#[test]
fn test_representative_no_cards_is_none() {
    let doc = load(json!({ "items": [], "rels": { "me": ["https://twitter.com/x"] } }));
    assert_eq!(get_representative_card(&doc, "https://example.com/"), None);
}

// ============================================================================
// Author
// ============================================================================

#[test]
fn test_author_nested_card_ignores_context() {
    let doc = load(json!({
        "items": [
            { "type": ["h-entry"], "properties": {
                "author": [{ "type": ["h-card"], "properties": { "name": ["Inline"] } }]
            }},
            { "type": ["h-card"], "properties": { "name": ["Page Card"] } }
        ],
        "rels": { "author": ["https://example.com/bob"] }
    }));

    let author = get_author(&doc.items[0], Some(&doc), None, AuthorOptions::default());
    assert_eq!(author.and_then(|a| a.as_card()).and_then(name_of), Some("Inline"));
}

#[test]
fn test_author_string_matched_by_name() {
    let doc = load(json!({
        "items": [
            { "type": ["h-entry"], "properties": { "author": ["Bob Smith"] } },
            { "type": ["h-card"], "properties": {
                "name": ["Bob Smith"], "url": ["https://bob.example/"]
            }}
        ],
        "rels": {}
    }));

    let author = get_author(&doc.items[0], Some(&doc), None, AuthorOptions::default());
    assert!(std::ptr::eq(author.and_then(|a| a.as_card()).unwrap(), &doc.items[1]));
}

#[test]
fn test_author_from_rel_author() {
    let doc = load(json!({
        "items": [
            { "type": ["h-entry"], "properties": { "name": ["Post"] } },
            { "type": ["h-card"], "properties": {
                "name": ["Bob"], "url": ["https://example.com/bob"]
            }}
        ],
        "rels": { "author": ["https://example.com/bob"] }
    }));

    let author = get_author(&doc.items[0], Some(&doc), None, AuthorOptions::default());
    assert_eq!(author.and_then(|a| a.as_card()).and_then(name_of), Some("Bob"));
}

#[test]
fn test_author_prefers_url_match_over_name_match() {
    let doc = load(json!({
        "items": [
            { "type": ["h-entry"], "properties": { "author": ["https://bob.example/"] } },
            { "type": ["h-card"], "properties": { "name": ["https://bob.example/"] } },
            { "type": ["h-card"], "properties": {
                "name": ["Bob"], "url": ["https://bob.example"]
            }}
        ],
        "rels": {}
    }));

    let author = get_author(&doc.items[0], Some(&doc), None, AuthorOptions::default());
    assert_eq!(author.and_then(|a| a.as_card()).and_then(name_of), Some("Bob"));
}

#[test]
fn test_author_without_any_signal_is_none() {
    let doc = load(json!({
        "items": [
            { "type": ["h-entry"], "properties": { "name": ["Post"] } },
            { "type": ["h-card"], "properties": { "name": ["Someone"] } }
        ],
        "rels": {}
    }));

    assert_eq!(
        get_author(&doc.items[0], Some(&doc), None, AuthorOptions::default()),
        None
    );
}

#[test]
fn test_author_unmatched_rel_author_is_identifier() {
    let doc = load(json!({
        "items": [{ "type": ["h-entry"], "properties": {} }],
        "rels": { "author": ["https://example.com/bob"] }
    }));

    assert_eq!(
        get_author(&doc.items[0], Some(&doc), None, AuthorOptions::default()),
        Some(Author::Identifier("https://example.com/bob"))
    );
}

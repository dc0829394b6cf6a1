//! End-to-end tests over a realistic blog page fixture.

use mfq::{
    AuthorOptions, Collection, Item, find_by_type, flatten_all, get_author, get_html,
    get_plaintext, get_published, get_representative_card, get_summary, get_updated,
};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn load_fixture(name: &str) -> Collection {
    let path = format!("{}/{}", FIXTURES_DIR, name);
    let json = std::fs::read_to_string(&path).expect("Failed to read fixture");
    Collection::from_json_str(&json).expect("Failed to load fixture")
}

fn entries(doc: &Collection) -> Vec<&Item> {
    find_by_type(doc, "h-entry", true)
}

#[test]
fn test_flattened_document_order() {
    let doc = load_fixture("blog_post.json");
    let types: Vec<&str> = flatten_all(&doc)
        .iter()
        .map(|item| item.types[0].as_str())
        .collect();

    assert_eq!(
        types,
        ["h-card", "h-feed", "h-entry", "h-cite", "h-card", "h-entry"]
    );
}

#[test]
fn test_representative_card_by_uid() {
    let doc = load_fixture("blog_post.json");
    let card = get_representative_card(&doc, "https://jane.example").expect("card");

    assert_eq!(get_plaintext(card, "name", None), Some("Jane Doe"));
}

#[test]
fn test_representative_card_by_rel_me_on_other_page() {
    let doc = load_fixture("blog_post.json");
    let card = get_representative_card(&doc, "https://jane.example/2024/rust").expect("card");

    assert_eq!(get_plaintext(card, "name", None), Some("Jane Doe"));
}

#[test]
fn test_entry_author_by_name() {
    let doc = load_fixture("blog_post.json");
    let entry = entries(&doc)[0];
    let author = get_author(entry, Some(&doc), None, AuthorOptions::default())
        .and_then(|a| a.as_card())
        .expect("author card");

    assert!(std::ptr::eq(author, &doc.items[0]));
}

#[test]
fn test_entry_author_by_rel_author() {
    let doc = load_fixture("blog_post.json");
    let entry = entries(&doc)[1];
    let author = get_author(entry, Some(&doc), None, AuthorOptions::default())
        .and_then(|a| a.as_card())
        .expect("author card");

    assert_eq!(get_plaintext(author, "name", None), Some("Jane Doe"));
}

#[test]
fn test_comment_author_is_nested_card() {
    let doc = load_fixture("blog_post.json");
    let cite = find_by_type(&doc, "h-cite", true)[0];
    let author = get_author(cite, Some(&doc), None, AuthorOptions::default())
        .and_then(|a| a.as_card())
        .expect("author card");

    assert_eq!(get_plaintext(author, "name", None), Some("Max Mustermann"));
}

#[test]
fn test_entry_values() {
    let doc = load_fixture("blog_post.json");
    let entries = entries(&doc);

    assert_eq!(
        get_html(entries[0], "name", None).as_deref(),
        Some("Rust &amp; microformats")
    );
    assert_eq!(
        get_html(entries[0], "content", None).as_deref(),
        Some("<p>A short post about parsing pages with <em>Rust</em>.</p>")
    );
    assert_eq!(get_summary(entries[0]).as_deref(), Some("A short post about…"));
    assert_eq!(
        get_updated(entries[0], true, None),
        Some("2024-03-01T09:30:00+00:00")
    );
}

#[test]
fn test_malformed_date_rejected_only_when_validating() {
    let doc = load_fixture("blog_post.json");
    let untitled = entries(&doc)[1];

    assert_eq!(get_published(untitled, false, None), Some("not a date"));
    assert_eq!(get_published(untitled, true, None), None);
}

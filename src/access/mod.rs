//! Value accessors: plaintext, HTML, and summary extraction with fallbacks.
//!
//! Every accessor treats a missing or empty property as absent and returns
//! the caller's fallback (`None` by default) instead of failing.

mod date;

use std::borrow::Cow;

pub use date::{
    DateKind, get_date_property, get_date_property_with, get_published, get_updated,
    is_well_formed_datetime,
};

use crate::model::{Item, PropertyValue};
use crate::util::{escape_html, truncate_chars};

/// Characters of `content` kept by [`get_summary`] when no `summary` exists.
pub const SUMMARY_MAX_CHARS: usize = 19;

/// Get the plaintext of a property value.
///
/// Items and embedded values yield their `value` field; plain strings are
/// returned as-is. An item without a `value` yields `None`.
pub fn to_plaintext(value: &PropertyValue) -> Option<&str> {
    match value {
        PropertyValue::Text(s) => Some(s),
        PropertyValue::Embedded(embedded) => Some(&embedded.value),
        PropertyValue::Item(item) => item.value.as_deref(),
    }
}

/// Get the HTML of a property value.
///
/// Embedded values yield their markup. Items and plain strings are escaped.
pub fn to_html(value: &PropertyValue) -> Cow<'_, str> {
    match value {
        PropertyValue::Embedded(embedded) => Cow::Borrowed(&embedded.html),
        PropertyValue::Item(item) => escape_html(item.value.as_deref().unwrap_or_default()),
        PropertyValue::Text(s) => escape_html(s),
    }
}

/// Get the plaintext of the first value of a property, or `fallback`.
pub fn get_plaintext<'a>(item: &'a Item, name: &str, fallback: Option<&'a str>) -> Option<&'a str> {
    match item.first(name) {
        Some(value) => to_plaintext(value),
        None => fallback,
    }
}

/// Get the plaintext of every value of a property, or `fallback`.
///
/// Values with no plaintext (items lacking `value`) are skipped.
pub fn get_plaintext_all<'a>(
    item: &'a Item,
    name: &str,
    fallback: Option<Vec<&'a str>>,
) -> Option<Vec<&'a str>> {
    match item.property(name) {
        Some(values) => Some(values.iter().filter_map(to_plaintext).collect()),
        None => fallback,
    }
}

/// Get the HTML of the first value of a property, or `fallback`.
pub fn get_html<'a>(
    item: &'a Item,
    name: &str,
    fallback: Option<Cow<'a, str>>,
) -> Option<Cow<'a, str>> {
    match item.first(name) {
        Some(value) => Some(to_html(value)),
        None => fallback,
    }
}

/// Get a short plaintext summary of an item.
///
/// Uses `summary` when present. Otherwise falls back to the start of
/// `content`, cut to [`SUMMARY_MAX_CHARS`] characters with a trailing `…`
/// when it was longer.
pub fn get_summary(item: &Item) -> Option<Cow<'_, str>> {
    if item.has_property("summary") {
        return get_plaintext(item, "summary", None).map(Cow::Borrowed);
    }

    let content = get_plaintext(item, "content", None)?.trim();
    Some(match truncate_chars(content, SUMMARY_MAX_CHARS) {
        Some(cut) => Cow::Owned(format!("{}…", cut.trim_end())),
        None => Cow::Borrowed(content),
    })
}

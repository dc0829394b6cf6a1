//! Search items by predicate, type, or property value.
//!
//! Collections and bare items are flattened before searching unless the
//! caller opts out; item sequences are searched exactly as given.

use crate::flatten::{flatten_all, flatten_item};
use crate::model::{Collection, Item, PropertyValue};

/// Anything that can be searched.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// A whole document.
    Collection(&'a Collection),
    /// A single item, treated as a one-element collection.
    Item(&'a Item),
    /// Owned items, searched as given.
    Items(&'a [Item]),
    /// Borrowed items (e.g. an earlier query result), searched as given.
    Refs(&'a [&'a Item]),
}

impl<'a> Source<'a> {
    /// Resolve the source into the sequence that predicates run over.
    fn candidates(self, flatten: bool) -> Vec<&'a Item> {
        match self {
            Source::Collection(doc) if flatten => flatten_all(doc),
            Source::Collection(doc) => doc.items.iter().collect(),
            Source::Item(item) if flatten => flatten_item(item),
            Source::Item(item) => vec![item],
            Source::Items(items) => items.iter().collect(),
            Source::Refs(items) => items.to_vec(),
        }
    }
}

impl<'a> From<&'a Collection> for Source<'a> {
    fn from(doc: &'a Collection) -> Self {
        Source::Collection(doc)
    }
}

impl<'a> From<&'a Item> for Source<'a> {
    fn from(item: &'a Item) -> Self {
        Source::Item(item)
    }
}

impl<'a> From<&'a [Item]> for Source<'a> {
    fn from(items: &'a [Item]) -> Self {
        Source::Items(items)
    }
}

impl<'a> From<&'a Vec<Item>> for Source<'a> {
    fn from(items: &'a Vec<Item>) -> Self {
        Source::Items(items)
    }
}

impl<'a> From<&'a [&'a Item]> for Source<'a> {
    fn from(items: &'a [&'a Item]) -> Self {
        Source::Refs(items)
    }
}

impl<'a> From<&'a Vec<&'a Item>> for Source<'a> {
    fn from(items: &'a Vec<&'a Item>) -> Self {
        Source::Refs(items)
    }
}

/// Find every item for which `predicate` holds, in source order.
pub fn find_by_predicate<'a, S, F>(source: S, predicate: F, flatten: bool) -> Vec<&'a Item>
where
    S: Into<Source<'a>>,
    F: Fn(&Item) -> bool,
{
    let mut found = source.into().candidates(flatten);
    found.retain(|item| predicate(item));
    found
}

/// Find every item carrying the type tag `type_name`.
///
/// ```
/// use mfq::{Collection, Item, find_by_type};
///
/// let doc = Collection::new()
///     .with_item(Item::new("h-entry").with_property("author", Item::new("h-card")));
///
/// assert_eq!(find_by_type(&doc, "h-card", true).len(), 1);
/// assert!(find_by_type(&doc, "h-card", false).is_empty());
/// ```
pub fn find_by_type<'a, S>(source: S, type_name: &str, flatten: bool) -> Vec<&'a Item>
where
    S: Into<Source<'a>>,
{
    find_by_predicate(source, |item| item.has_type(type_name), flatten)
}

/// Find every item whose `name` property contains `value` exactly.
///
/// Comparison is not plaintext-coerced: a plain string never matches an
/// embedded value or nested item.
pub fn find_by_property<'a, S, V>(source: S, name: &str, value: &V, flatten: bool) -> Vec<&'a Item>
where
    S: Into<Source<'a>>,
    V: ?Sized,
    PropertyValue: PartialEq<V>,
{
    find_by_predicate(
        source,
        |item| {
            item.property(name)
                .is_some_and(|values| values.iter().any(|v| v == value))
        },
        flatten,
    )
}

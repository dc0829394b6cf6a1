//! Top-level parser output: items plus page-wide relation links.

use indexmap::IndexMap;
use serde::Serialize;

use super::item::Item;

/// Parsed items of a page together with its `rels` mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Collection {
    pub items: Vec<Item>,
    pub rels: IndexMap<String, Vec<String>>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Append a URL to a relation, creating the relation if needed.
    pub fn with_rel(mut self, rel: impl Into<String>, url: impl Into<String>) -> Self {
        self.rels.entry(rel.into()).or_default().push(url.into());
        self
    }

    /// Get all URLs for a relation (e.g. `"me"`, `"author"`).
    ///
    /// Returns an empty slice if the relation is absent.
    pub fn rel_urls(&self, rel: &str) -> &[String] {
        self.rels.get(rel).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl From<Item> for Collection {
    /// A bare item is a one-element collection with no rels.
    fn from(item: Item) -> Self {
        Self::new().with_item(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel_urls_absent_is_empty() {
        let doc = Collection::new().with_rel("me", "https://a.example/");

        assert_eq!(doc.rel_urls("me"), ["https://a.example/"]);
        assert!(doc.rel_urls("author").is_empty());
    }

    #[test]
    fn test_item_into_collection() {
        let doc = Collection::from(Item::new("h-entry"));

        assert_eq!(doc.items.len(), 1);
        assert!(doc.rels.is_empty());
    }
}

//! Linearize item trees into flat, ordered sequences for searching.
//!
//! Order is depth-first preorder: every nested item is immediately followed
//! by its own nested property items before its siblings are visited.
//!
//! ```text
//! [item₀, flat(item₀.props), child₀, flat(child₀.props), child₁, ..., item₁, ...]
//! ```

use crate::model::{Collection, Item};

/// Levels of property nesting expanded before the flattener stops descending.
///
/// Matches `serde_json`'s recursion limit, so anything loaded from JSON is
/// always flattened completely.
pub const MAX_FLATTEN_DEPTH: usize = 128;

/// Collect every item nested in `item`'s property values, in preorder.
///
/// `item` itself is not included.
pub fn flatten_properties(item: &Item) -> Vec<&Item> {
    let mut out = Vec::new();
    push_property_items(item, 0, &mut out);
    out
}

fn push_property_items<'a>(item: &'a Item, depth: usize, out: &mut Vec<&'a Item>) {
    if depth >= MAX_FLATTEN_DEPTH {
        tracing::warn!(
            depth,
            types = ?item.types,
            "item nesting exceeds flatten depth limit, skipping deeper items"
        );
        return;
    }

    for nested in item
        .properties
        .values()
        .flatten()
        .filter_map(|value| value.as_item())
    {
        out.push(nested);
        push_property_items(nested, depth + 1, out);
    }
}

/// Flatten a sequence of top-level items.
///
/// Each item is followed by its property items, then each of its direct
/// children together with the child's property items. Grandchildren are not
/// expanded.
pub fn flatten_items<'a, I>(items: I) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut out = Vec::new();
    for item in items {
        out.push(item);
        push_property_items(item, 0, &mut out);
        for child in &item.children {
            out.push(child);
            push_property_items(child, 0, &mut out);
        }
    }
    out
}

/// Flatten every item in a collection.
pub fn flatten_all(collection: &Collection) -> Vec<&Item> {
    flatten_items(&collection.items)
}

/// Flatten a bare item as a one-element collection.
pub fn flatten_item(item: &Item) -> Vec<&Item> {
    flatten_items(std::iter::once(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(items: &[&'a Item]) -> Vec<&'a str> {
        items
            .iter()
            .map(|i| i.value.as_deref().unwrap_or("?"))
            .collect()
    }

    fn node(name: &str) -> Item {
        Item::new("h-x").with_value(name)
    }

    #[test]
    fn test_single_item_without_nesting() {
        let doc = Collection::new().with_item(node("a"));
        assert_eq!(names(&flatten_all(&doc)), ["a"]);
    }

    #[test]
    fn test_property_items_follow_their_parent() {
        let item = node("root")
            .with_property("p", node("x").with_property("q", node("x1")))
            .with_property("p", "plain")
            .with_property("r", node("y"));

        assert_eq!(names(&flatten_properties(&item)), ["x", "x1", "y"]);
    }

    #[test]
    fn test_children_one_level_only() {
        let item = node("top")
            .with_property("author", node("card"))
            .with_child(
                node("c0")
                    .with_property("p", node("c0p"))
                    .with_child(node("grandchild")),
            )
            .with_child(node("c1"));
        let doc = Collection::new().with_item(item).with_item(node("next"));

        assert_eq!(
            names(&flatten_all(&doc)),
            ["top", "card", "c0", "c0p", "c1", "next"]
        );
    }

    #[test]
    fn test_flatten_item_matches_collection() {
        let item = node("a").with_child(node("b"));
        let doc = Collection::from(item.clone());
        assert_eq!(names(&flatten_item(&item)), names(&flatten_all(&doc)));
    }

    #[test]
    fn test_depth_limit_stops_descent() {
        let mut item = node("leaf");
        for _ in 0..MAX_FLATTEN_DEPTH + 10 {
            item = node("n").with_property("p", item);
        }
        assert_eq!(flatten_properties(&item).len(), MAX_FLATTEN_DEPTH);
    }
}

//! Shape predicates over raw parser JSON, and the lenient loader built on them.
//!
//! The upstream parser emits plain JSON. Nodes that fail these predicates are
//! treated as absent: the loader drops them rather than failing, so the typed
//! model only ever holds well-formed items.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::collection::Collection;
use super::item::{EmbeddedValue, Item, PropertyValue};
use crate::error::{Error, Result};

// ============================================================================
// Predicates
// ============================================================================

/// Check if a node is an item: a keyed mapping with a non-empty `type` and a
/// `properties` entry.
pub fn is_item(node: &Value) -> bool {
    let Some(map) = keyed_object(node) else {
        return false;
    };
    let has_type = map
        .get("type")
        .and_then(Value::as_array)
        .is_some_and(|types| types.iter().any(Value::is_string));
    has_type && map.get("properties").is_some_and(|p| !p.is_null())
}

/// Check if a node is a collection: it has an `items` sequence.
pub fn is_collection(node: &Value) -> bool {
    node.get("items").is_some_and(Value::is_array)
}

/// Check if a node is an embedded plaintext/markup pair.
pub fn is_embedded_value(node: &Value) -> bool {
    keyed_object(node).is_some_and(|map| {
        map.get("value").is_some_and(|v| !v.is_null())
            && map.get("html").is_some_and(|v| !v.is_null())
    })
}

/// Get the object if it is keyed by names rather than numeric indices.
///
/// Mirrors how the parser's consumers distinguish an object from an
/// index-keyed array that happens to be encoded as an object.
fn keyed_object(node: &Value) -> Option<&Map<String, Value>> {
    let map = node.as_object()?;
    match map.keys().next() {
        Some(first) if is_numeric_key(first) => None,
        _ => Some(map),
    }
}

fn is_numeric_key(key: &str) -> bool {
    key.parse::<f64>().is_ok_and(f64::is_finite)
}

// ============================================================================
// Loading
// ============================================================================

impl Collection {
    /// Parse a collection from the parser's JSON text.
    ///
    /// A bare item at the top level loads as a one-element collection.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Convert a parsed JSON document into a collection.
    ///
    /// Malformed nested nodes are dropped. Fails only when the top level is
    /// neither a collection nor an item.
    pub fn from_value(value: &Value) -> Result<Self> {
        if is_collection(value) {
            let items = value
                .get("items")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|node| {
                            let item = Item::from_value(node);
                            if item.is_none() {
                                tracing::warn!("dropping malformed top-level item");
                            }
                            item
                        })
                        .collect()
                })
                .unwrap_or_default();
            let rels = value.get("rels").map(convert_rels).unwrap_or_default();
            return Ok(Self { items, rels });
        }

        Item::from_value(value)
            .map(Collection::from)
            .ok_or(Error::NotADocument)
    }
}

impl Item {
    /// Convert a JSON node into an item, or `None` if it is not item-shaped.
    pub fn from_value(node: &Value) -> Option<Self> {
        if !is_item(node) {
            return None;
        }
        let map = node.as_object()?;

        let types = map
            .get("type")
            .and_then(Value::as_array)
            .map(|types| {
                types
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let properties = map
            .get("properties")
            .and_then(Value::as_object)
            .map(convert_properties)
            .unwrap_or_default();

        let children = map
            .get("children")
            .and_then(Value::as_array)
            .map(|children| children.iter().filter_map(Item::from_value).collect())
            .unwrap_or_default();

        Some(Self {
            types,
            properties,
            children,
            value: map.get("value").and_then(Value::as_str).map(str::to_string),
            html: map.get("html").and_then(Value::as_str).map(str::to_string),
        })
    }
}

impl PropertyValue {
    /// Classify a JSON node as a property value.
    ///
    /// Items are checked before embedded values, since nested `e-*` items
    /// carry `value` and `html` too.
    pub fn from_value(node: &Value) -> Option<Self> {
        if is_item(node) {
            return Item::from_value(node).map(PropertyValue::Item);
        }
        if is_embedded_value(node) {
            let value = node.get("value").and_then(Value::as_str)?;
            let html = node.get("html").and_then(Value::as_str)?;
            return Some(PropertyValue::Embedded(EmbeddedValue::new(value, html)));
        }
        match node {
            Value::String(s) => Some(PropertyValue::Text(s.clone())),
            _ => {
                tracing::trace!(?node, "dropping non-conforming property value");
                None
            }
        }
    }
}

fn convert_properties(map: &Map<String, Value>) -> IndexMap<String, Vec<PropertyValue>> {
    map.iter()
        .filter_map(|(name, values)| {
            let values = values.as_array()?;
            Some((
                name.clone(),
                values.iter().filter_map(PropertyValue::from_value).collect(),
            ))
        })
        .collect()
}

fn convert_rels(rels: &Value) -> IndexMap<String, Vec<String>> {
    let Some(map) = rels.as_object() else {
        return IndexMap::new();
    };
    map.iter()
        .filter_map(|(rel, urls)| {
            let urls = urls.as_array()?;
            Some((
                rel.clone(),
                urls.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ))
        })
        .collect()
}

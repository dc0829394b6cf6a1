//! Items and their property values.

use indexmap::IndexMap;
use serde::Serialize;

/// Type tag marking an item as a person or organization card.
pub const CARD_TYPE: &str = "h-card";

/// A plaintext/markup pair, as produced for `e-*` properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbeddedValue {
    pub value: String,
    pub html: String,
}

impl EmbeddedValue {
    pub fn new(value: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            html: html.into(),
        }
    }
}

/// One entry in an item's property sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Already-plain string value.
    Text(String),
    /// Plaintext with its markup.
    Embedded(EmbeddedValue),
    /// Nested item (e.g. an `h-card` under `author`).
    Item(Item),
}

impl PropertyValue {
    /// Get the nested item if this value is one.
    pub fn as_item(&self) -> Option<&Item> {
        match self {
            PropertyValue::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Get the string if this is a plain text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if this value is a nested item.
    pub fn is_item(&self) -> bool {
        matches!(self, PropertyValue::Item(_))
    }

    /// Check if this value is an embedded plaintext/markup pair.
    pub fn is_embedded(&self) -> bool {
        matches!(self, PropertyValue::Embedded(_))
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<EmbeddedValue> for PropertyValue {
    fn from(v: EmbeddedValue) -> Self {
        PropertyValue::Embedded(v)
    }
}

impl From<Item> for PropertyValue {
    fn from(item: Item) -> Self {
        PropertyValue::Item(item)
    }
}

// Exact comparisons used by property search. A `Text` never equals an
// embedded value or item, even when their plaintext is the same.

impl PartialEq<str> for PropertyValue {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for PropertyValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<String> for PropertyValue {
    fn eq(&self, other: &String) -> bool {
        self.as_text() == Some(other.as_str())
    }
}

impl PartialEq<EmbeddedValue> for PropertyValue {
    fn eq(&self, other: &EmbeddedValue) -> bool {
        matches!(self, PropertyValue::Embedded(v) if v == other)
    }
}

/// A recognized entity node: a non-empty set of type tags plus properties.
///
/// Items are built either by the JSON loader (see
/// [`Collection::from_value`](crate::Collection::from_value)) or directly
/// with the builder methods:
///
/// ```
/// use mfq::Item;
///
/// let card = Item::new("h-card")
///     .with_property("name", "Jane Doe")
///     .with_property("url", "https://jane.example/");
///
/// assert!(card.is_card());
/// assert!(card.has_property("url"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub properties: IndexMap<String, Vec<PropertyValue>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Item>,
    /// Plaintext the parser attaches when this item is itself a property value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Markup the parser attaches for embedded (`e-*`) nested items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl Item {
    /// Create an item with a single type tag and no properties.
    pub fn new(type_tag: impl Into<String>) -> Self {
        Self::with_types([type_tag])
    }

    /// Create an item with several type tags.
    pub fn with_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            properties: IndexMap::new(),
            children: Vec::new(),
            value: None,
            html: None,
        }
    }

    /// Append a value to a property, creating the property if needed.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    pub fn with_child(mut self, child: Item) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Check if `tag` is one of this item's types.
    pub fn has_type(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    /// Check if this item is typed as a card.
    pub fn is_card(&self) -> bool {
        self.has_type(CARD_TYPE)
    }

    /// Check if the property exists and holds at least one value.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.get(name).is_some_and(|values| !values.is_empty())
    }

    /// Get the value sequence of a property, if it has any values.
    pub fn property(&self, name: &str) -> Option<&[PropertyValue]> {
        self.properties
            .get(name)
            .map(Vec::as_slice)
            .filter(|values| !values.is_empty())
    }

    /// Get the first value of a property.
    pub fn first(&self, name: &str) -> Option<&PropertyValue> {
        self.property(name).and_then(<[PropertyValue]>::first)
    }
}

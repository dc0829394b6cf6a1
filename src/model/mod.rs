//! Data model for parsed microformats documents.
//!
//! This module contains:
//! - Items, property values, and embedded plaintext/markup pairs
//! - Collections (top-level items plus page `rels`)
//! - Shape predicates over raw parser JSON and the loader built on them

mod collection;
mod item;
pub mod shape;

pub use collection::Collection;
pub use item::{CARD_TYPE, EmbeddedValue, Item, PropertyValue};
pub use shape::{is_collection, is_embedded_value, is_item};

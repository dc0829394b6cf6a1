//! # mfq
//!
//! Query and resolve microformats2 item trees, as produced by an mf2 parser.
//!
//! ## Features
//!
//! - Load parser JSON leniently: malformed nodes are dropped, never fatal
//! - Extract plaintext, HTML, summaries, and dates with fallbacks
//! - Flatten nested items into a linear, searchable order
//! - Search by type, property value, or any predicate
//! - Find a page's representative h-card
//! - Resolve the author of an entry from its page context
//!
//! ## Quick Start
//!
//! ```
//! use mfq::{AuthorOptions, Collection, get_author, get_representative_card};
//!
//! let doc = Collection::from_json_str(r#"{
//!     "items": [
//!         { "type": ["h-entry"], "properties": {
//!             "name": ["Hello"],
//!             "author": ["Jane Doe"]
//!         }},
//!         { "type": ["h-card"], "properties": {
//!             "name": ["Jane Doe"],
//!             "uid": ["https://jane.example/"],
//!             "url": ["https://jane.example/"]
//!         }}
//!     ],
//!     "rels": {}
//! }"#).unwrap();
//!
//! let card = get_representative_card(&doc, "https://jane.example/").unwrap();
//! assert!(card.is_card());
//!
//! let author = get_author(&doc.items[0], Some(&doc), None, AuthorOptions::default());
//! assert_eq!(author.and_then(|a| a.as_card()), Some(card));
//! ```
//!
//! ## Working with Items
//!
//! [`Item`] and [`Collection`] can also be built directly:
//!
//! ```
//! use mfq::{Collection, Item, find_by_type, get_plaintext};
//!
//! let doc = Collection::new()
//!     .with_item(
//!         Item::new("h-entry")
//!             .with_property("author", Item::new("h-card").with_property("name", "Jane")),
//!     )
//!     .with_rel("me", "https://social.example/@jane");
//!
//! let cards = find_by_type(&doc, "h-card", true);
//! assert_eq!(get_plaintext(cards[0], "name", None), Some("Jane"));
//! ```

pub mod access;
pub mod error;
pub mod flatten;
pub mod model;
pub mod query;
pub mod resolve;
pub mod urls;
pub mod util;

pub use access::{
    DateKind, get_date_property, get_html, get_plaintext, get_plaintext_all, get_published,
    get_summary, get_updated, to_html, to_plaintext,
};
pub use error::{Error, Result};
pub use flatten::{flatten_all, flatten_item, flatten_properties};
pub use model::{CARD_TYPE, Collection, EmbeddedValue, Item, PropertyValue};
pub use query::{Source, find_by_predicate, find_by_property, find_by_type};
pub use resolve::{Author, AuthorOptions, get_author, get_representative_card};
pub use urls::{parse_url_components, urls_match};

//! Heuristic resolvers over whole documents.
//!
//! - [`get_representative_card`]: the card a page is about
//! - [`get_author`]: who wrote a given item

mod author;
mod representative;

pub use author::{Author, AuthorOptions, get_author};
pub use representative::get_representative_card;

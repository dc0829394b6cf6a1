//! Authorship resolution.
//!
//! Works out who wrote an item from its own `author`/`reviewer` properties,
//! then, given the surrounding page, by matching page cards on URL, name,
//! `rel=author` links, and finally hostname.

use crate::access::{get_plaintext, to_plaintext};
use crate::model::{CARD_TYPE, Collection, Item};
use crate::query::find_by_type;
use crate::urls::same_host;

use super::representative::has_url_matching;

/// Switches for the looser author-matching stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorOptions {
    /// Match a plain-string author against card `name`s.
    pub match_name: bool,
    /// Fall back to a card sharing the item's hostname.
    pub match_hostname: bool,
}

impl Default for AuthorOptions {
    fn default() -> Self {
        Self {
            match_name: true,
            match_hostname: true,
        }
    }
}

impl AuthorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match_name(mut self, enabled: bool) -> Self {
        self.match_name = enabled;
        self
    }

    pub fn with_match_hostname(mut self, enabled: bool) -> Self {
        self.match_hostname = enabled;
        self
    }
}

/// A resolved author.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Author<'a> {
    /// A card describing the author.
    Card(&'a Item),
    /// An identifier (name or URL) that no card could be found for.
    Identifier(&'a str),
}

impl<'a> Author<'a> {
    /// Get the card if the author was resolved to one.
    pub fn as_card(&self) -> Option<&'a Item> {
        match self {
            Author::Card(card) => Some(card),
            Author::Identifier(_) => None,
        }
    }

    /// Get the identifier if no card was found.
    pub fn as_identifier(&self) -> Option<&'a str> {
        match self {
            Author::Identifier(id) => Some(id),
            Author::Card(_) => None,
        }
    }
}

/// The author named on the item itself, before any page context is used.
///
/// A nested `author` item wins, then a nested `reviewer` item, then the
/// plaintext of `author`.
fn entry_author(item: &Item) -> Option<Author<'_>> {
    if let Some(card) = item.first("author").and_then(|v| v.as_item()) {
        return Some(Author::Card(card));
    }
    if let Some(card) = item.first("reviewer").and_then(|v| v.as_item()) {
        return Some(Author::Card(card));
    }
    get_plaintext(item, "author", None).map(Author::Identifier)
}

/// Resolve the author of `item`.
///
/// Without `context` only the item's own properties are consulted. With it,
/// a plain-string author is upgraded to a page card where possible, and an
/// item without a resolvable author falls back to the page's first
/// `rel=author` link and then to a card on the same host as `url` (or the
/// item's own `url`).
///
/// Returns `None` when nothing identifies an author. An [`Author::Identifier`]
/// result after context resolution is the `rel=author` URL no card matched.
pub fn get_author<'a>(
    item: &'a Item,
    context: Option<&'a Collection>,
    url: Option<&'a str>,
    options: AuthorOptions,
) -> Option<Author<'a>> {
    let url = url.or_else(|| get_plaintext(item, "url", None));
    let mut author = entry_author(item);

    let Some(context) = context else {
        tracing::trace!("no page context, returning entry author as found");
        return author;
    };

    let cards = find_by_type(context, CARD_TYPE, true);

    if let Some(Author::Identifier(id)) = author
        && let Some(card) = cards.iter().copied().find(|card| has_url_matching(card, id))
    {
        tracing::debug!(author = id, "author string matched a card url");
        author = Some(Author::Card(card));
    }

    if options.match_name
        && let Some(Author::Identifier(id)) = author
        && let Some(card) = cards
            .iter()
            .copied()
            .find(|card| get_plaintext(card, "name", None) == Some(id))
    {
        tracing::debug!(author = id, "author string matched a card name");
        author = Some(Author::Card(card));
    }

    if let Some(Author::Card(card)) = author {
        return Some(Author::Card(card));
    }

    let rel_author = context.rel_urls("author").first().map(String::as_str);
    if let Some(href) = rel_author
        && let Some(card) = cards.iter().copied().find(|card| has_url_matching(card, href))
    {
        tracing::debug!(href, "author found via rel=author");
        return Some(Author::Card(card));
    }

    if options.match_hostname
        && let Some(url) = url
        && let Some(card) = cards.iter().copied().find(|card| {
            card.property("url").is_some_and(|urls| {
                urls.iter()
                    .filter_map(to_plaintext)
                    .any(|candidate| same_host(candidate, url))
            })
        })
    {
        tracing::debug!(url, "author found by matching hostname");
        return Some(Author::Card(card));
    }

    tracing::trace!(?rel_author, "no author card found");
    rel_author.map(Author::Identifier)
}

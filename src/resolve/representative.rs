//! Representative h-card selection.
//!
//! Finds the single card a page is "about", trying three tiers in order:
//! 1. a card whose `uid` and one of whose `url`s match the page URL
//! 2. a card with a `url` matching one of the page's `rel=me` links
//! 3. the only card with a `url` matching the page URL
//!
//! Ambiguity in tier 3 is a failure, never a guess.

use crate::access::{get_plaintext, to_plaintext};
use crate::model::{CARD_TYPE, Collection, Item};
use crate::query::find_by_type;
use crate::urls::urls_match;

/// Check if any `url` value of `card` matches `target`.
pub(crate) fn has_url_matching(card: &Item, target: &str) -> bool {
    card.property("url").is_some_and(|urls| {
        urls.iter()
            .filter_map(to_plaintext)
            .any(|url| urls_match(url, target))
    })
}

/// Find the representative card of a page, or `None` if there isn't exactly
/// one clear candidate.
///
/// ```
/// use mfq::{Collection, Item, get_representative_card};
///
/// let doc = Collection::new().with_item(
///     Item::new("h-card")
///         .with_property("uid", "https://jane.example/")
///         .with_property("url", "https://jane.example/"),
/// );
///
/// assert!(get_representative_card(&doc, "https://jane.example").is_some());
/// assert!(get_representative_card(&doc, "https://other.example/").is_none());
/// ```
pub fn get_representative_card<'a>(collection: &'a Collection, page_url: &str) -> Option<&'a Item> {
    let cards = find_by_type(collection, CARD_TYPE, true);

    if let Some(card) = cards.iter().copied().find(|card| {
        card.has_property("uid")
            && card.has_property("url")
            && get_plaintext(card, "uid", None).is_some_and(|uid| urls_match(uid, page_url))
            && has_url_matching(card, page_url)
    }) {
        tracing::debug!(page_url, "representative card found by uid and url");
        return Some(card);
    }

    let rel_me = collection.rel_urls("me");
    if !rel_me.is_empty()
        && let Some(card) = cards
            .iter()
            .copied()
            .find(|card| rel_me.iter().any(|me| has_url_matching(card, me)))
    {
        tracing::debug!(page_url, "representative card found by rel=me");
        return Some(card);
    }

    let mut matching = cards
        .iter()
        .copied()
        .filter(|card| has_url_matching(card, page_url));
    match (matching.next(), matching.next()) {
        (Some(card), None) => {
            tracing::debug!(page_url, "representative card found as sole url match");
            Some(card)
        }
        (Some(_), Some(_)) => {
            tracing::debug!(page_url, "several cards match the page url, no representative card");
            None
        }
        _ => {
            tracing::trace!(page_url, "no representative card");
            None
        }
    }
}

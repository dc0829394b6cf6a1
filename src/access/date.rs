//! Date properties (`published`/`updated`) with mutual fallback.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::get_plaintext;
use crate::model::Item;

/// Which date property to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
    Published,
    Updated,
}

impl DateKind {
    /// Property name for this kind.
    pub fn property_name(self) -> &'static str {
        match self {
            DateKind::Published => "published",
            DateKind::Updated => "updated",
        }
    }

    /// The kind used when this one is absent.
    pub fn complement(self) -> Self {
        match self {
            DateKind::Published => DateKind::Updated,
            DateKind::Updated => DateKind::Published,
        }
    }
}

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%z",
];

/// Check if a string is a well-formed date or date-time.
///
/// Accepts RFC 3339, ISO 8601 date-times with `T` or a space as separator
/// (seconds and offset optional), and plain `YYYY-MM-DD` dates.
pub fn is_well_formed_datetime(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }

    DateTime::parse_from_rfc3339(s).is_ok()
        || OFFSET_DATETIME_FORMATS
            .iter()
            .any(|fmt| DateTime::parse_from_str(s, fmt).is_ok())
        || NAIVE_DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(s, fmt).is_ok())
        || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Get a date property, falling back to its complement.
///
/// Reads `kind`'s property if present, else the other kind's. With
/// `ensure_valid`, a candidate that is not a well-formed date yields
/// `fallback` instead.
pub fn get_date_property<'a>(
    kind: DateKind,
    item: &'a Item,
    ensure_valid: bool,
    fallback: Option<&'a str>,
) -> Option<&'a str> {
    if ensure_valid {
        get_date_property_with(kind, item, is_well_formed_datetime, fallback)
    } else {
        get_date_property_with(kind, item, |_| true, fallback)
    }
}

/// Like [`get_date_property`], validating with a caller-supplied predicate.
pub fn get_date_property_with<'a, F>(
    kind: DateKind,
    item: &'a Item,
    is_valid: F,
    fallback: Option<&'a str>,
) -> Option<&'a str>
where
    F: Fn(&str) -> bool,
{
    let name = if item.has_property(kind.property_name()) {
        kind.property_name()
    } else if item.has_property(kind.complement().property_name()) {
        kind.complement().property_name()
    } else {
        return fallback;
    };

    match get_plaintext(item, name, None) {
        Some(candidate) if is_valid(candidate) => Some(candidate),
        Some(candidate) => {
            tracing::debug!(property = name, candidate, "rejecting malformed date");
            fallback
        }
        None => fallback,
    }
}

/// Get `published`, falling back to `updated`.
pub fn get_published<'a>(
    item: &'a Item,
    ensure_valid: bool,
    fallback: Option<&'a str>,
) -> Option<&'a str> {
    get_date_property(DateKind::Published, item, ensure_valid, fallback)
}

/// Get `updated`, falling back to `published`.
pub fn get_updated<'a>(
    item: &'a Item,
    ensure_valid: bool,
    fallback: Option<&'a str>,
) -> Option<&'a str> {
    get_date_property(DateKind::Updated, item, ensure_valid, fallback)
}

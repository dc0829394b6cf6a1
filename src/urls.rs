//! Component-wise URL equivalence.
//!
//! Absolute URLs are decomposed with the WHATWG parser from the `url` crate,
//! so hosts compare case-insensitively and default ports are elided. Strings
//! that are not absolute URLs (a bare name, a relative path) decompose as
//! relative references with only `path`, `query` and `fragment`.

use url::Url;

/// A URL split into its standard components.
///
/// Empty components are absent (`None`). `pathname` is always present: the
/// path, or `/` when the path is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
    pub pathname: String,
}

impl UrlComponents {
    /// Each component as a comparable `(name, value)` pair, absent ones
    /// included.
    fn components(&self) -> [(&'static str, Option<String>); 9] {
        [
            ("scheme", self.scheme.clone()),
            ("host", self.host.clone()),
            ("port", self.port.map(|p| p.to_string())),
            ("user", self.user.clone()),
            ("password", self.password.clone()),
            ("path", self.path.clone()),
            ("query", self.query.clone()),
            ("fragment", self.fragment.clone()),
            ("pathname", Some(self.pathname.clone())),
        ]
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Decompose a URL string into its components.
///
/// ```
/// use mfq::urls::parse_url_components;
///
/// let parts = parse_url_components("https://Example.com?q=1");
/// assert_eq!(parts.host.as_deref(), Some("example.com"));
/// assert_eq!(parts.pathname, "/");
/// assert_eq!(parts.query.as_deref(), Some("q=1"));
/// ```
pub fn parse_url_components(url: &str) -> UrlComponents {
    let url = url.trim();
    match Url::parse(url) {
        Ok(parsed) => {
            let path = non_empty(parsed.path());
            UrlComponents {
                scheme: non_empty(parsed.scheme()),
                host: parsed.host_str().and_then(non_empty),
                port: parsed.port(),
                user: non_empty(parsed.username()),
                password: parsed.password().and_then(non_empty),
                pathname: path.clone().unwrap_or_else(|| "/".to_string()),
                path,
                query: parsed.query().and_then(non_empty),
                fragment: parsed.fragment().and_then(non_empty),
            }
        }
        Err(_) => parse_relative_reference(url),
    }
}

fn parse_relative_reference(reference: &str) -> UrlComponents {
    let (rest, fragment) = match reference.split_once('#') {
        Some((rest, fragment)) => (rest, non_empty(fragment)),
        None => (reference, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, non_empty(query)),
        None => (rest, None),
    };
    let path = non_empty(path);

    UrlComponents {
        pathname: path.clone().unwrap_or_else(|| "/".to_string()),
        path,
        query,
        fragment,
        ..UrlComponents::default()
    }
}

/// Check if two URLs are equivalent.
///
/// Every component present on either side must be present on both sides
/// and equal. The relation is reflexive and symmetric.
pub fn urls_match(a: &str, b: &str) -> bool {
    let a = parse_url_components(a);
    let b = parse_url_components(b);

    a.components()
        .into_iter()
        .zip(b.components())
        .all(|((name, left), (_, right))| match (left, right) {
            (None, None) => true,
            (Some(left), Some(right)) => {
                let equal = left == right;
                if !equal {
                    tracing::trace!(component = name, %left, %right, "url component differs");
                }
                equal
            }
            _ => {
                tracing::trace!(component = name, "url component present on one side only");
                false
            }
        })
}

/// Check if two URLs share the same host.
///
/// Both must have a host; strings without one never match.
pub fn same_host(a: &str, b: &str) -> bool {
    match (parse_url_components(a).host, parse_url_components(b).host) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

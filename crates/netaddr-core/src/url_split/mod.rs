//! Generic URL splitting.
//!
//! Splits any `scheme://netloc/path?query#fragment` string into its five raw
//! parts without scheme-specific rules, so `rpc://` splits exactly like
//! `http://`. Nothing is percent-decoded or normalized, and splitting never
//! fails: malformed input shows up as empty fields.

mod netloc;
mod params;

pub use params::{ParamValue, Params};

use std::fmt;

/// The five raw components of a URL plus derived accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SplitUrl {
    /// Lowercased scheme, empty if none was recognized.
    pub scheme: String,
    /// Authority between `//` and the next `/`, `?` or `#`.
    pub netloc: String,
    pub path: String,
    /// Raw text after `?`, without the `?`.
    pub query: String,
    /// Raw text after `#`, without the `#`.
    pub fragment: String,
}

impl SplitUrl {
    /// Split with fragments enabled.
    pub fn parse(url: &str) -> Self {
        urlsplit(url, true)
    }

    /// Host from the netloc, IPv6 brackets removed. `None` when empty.
    pub fn hostname(&self) -> Option<String> {
        netloc::hostname(&self.netloc)
    }

    /// Port from the netloc, if one is given.
    pub fn port(&self) -> Option<u16> {
        netloc::port(&self.netloc)
    }

    pub fn username(&self) -> Option<String> {
        netloc::username(&self.netloc)
    }

    pub fn password(&self) -> Option<String> {
        netloc::password(&self.netloc)
    }

    /// Query parameters. With `collapse`, repeated keys keep their last
    /// value; otherwise they keep every value in order.
    pub fn params(&self, collapse: bool) -> Params {
        Params::decode(&self.query, collapse)
    }

    /// Reassembles the URL from its components.
    pub fn geturl(&self) -> String {
        let mut url = String::new();
        if !self.scheme.is_empty() {
            url.push_str(&self.scheme);
            url.push(':');
        }
        if !self.netloc.is_empty() || self.path.starts_with("//") {
            url.push_str("//");
            url.push_str(&self.netloc);
            if !self.path.is_empty() && !self.path.starts_with('/') {
                url.push('/');
            }
        }
        url.push_str(&self.path);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query);
        }
        if !self.fragment.is_empty() {
            url.push('#');
            url.push_str(&self.fragment);
        }
        url
    }
}

impl fmt::Display for SplitUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.geturl())
    }
}

/// Splits `url` into scheme, netloc, path, query and fragment.
///
/// When `allow_fragments` is false a `#` is ordinary data: it stays in the
/// query (if a `?` came first) or the path, and `fragment` is empty.
///
/// # Examples
///
/// - `urlsplit("http://[::1]:443/v2.0/", true)` → netloc `[::1]:443`, path `/v2.0/`
/// - `urlsplit("rpc://h/p?q#f", false)` → query `q#f`, fragment empty
pub fn urlsplit(url: &str, allow_fragments: bool) -> SplitUrl {
    let cleaned = clean(url);
    let mut rest = cleaned.as_str();

    let mut scheme = String::new();
    if let Some((candidate, after)) = rest.split_once(':') {
        if is_scheme(candidate) {
            scheme = candidate.to_ascii_lowercase();
            rest = after;
        }
    }

    let mut netloc = "";
    if let Some(after_slashes) = rest.strip_prefix("//") {
        let end = after_slashes
            .find(['/', '?', '#'])
            .unwrap_or(after_slashes.len());
        netloc = &after_slashes[..end];
        rest = &after_slashes[end..];
    }

    let mut fragment = "";
    if allow_fragments {
        if let Some((before, after)) = rest.split_once('#') {
            rest = before;
            fragment = after;
        }
    }

    let mut query = "";
    if let Some((before, after)) = rest.split_once('?') {
        rest = before;
        query = after;
    }

    tracing::trace!(url, scheme = %scheme, netloc, "split url");

    SplitUrl {
        scheme,
        netloc: netloc.to_string(),
        path: rest.to_string(),
        query: query.to_string(),
        fragment: fragment.to_string(),
    }
}

/// Trims leading control and space characters and drops embedded tab, CR
/// and LF. Trailing text is kept as-is.
fn clean(url: &str) -> String {
    url.trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect()
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

//! Query-string decoding into an ordered parameter view.
//!
//! Pairs are kept as raw substrings: no percent-decoding and no `+` to space
//! translation. A pair without `=` maps to an empty value; empty pairs
//! (`a=1&&b=2`) are skipped.

use std::collections::HashMap;

/// Value of a query parameter.
///
/// The non-collapsed view only uses `Many` for keys that occur more than
/// once; a key seen once stays `Single`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    Single(String),
    /// Every occurrence in query order. Always two or more values.
    Many(Vec<String>),
}

impl ParamValue {
    /// All values as a slice, one element for `Single`.
    pub fn as_slice(&self) -> &[String] {
        match self {
            ParamValue::Single(v) => std::slice::from_ref(v),
            ParamValue::Many(vs) => vs,
        }
    }

    /// The last value seen for this key.
    pub fn last(&self) -> &str {
        match self {
            ParamValue::Single(v) => v,
            // Many is never empty.
            ParamValue::Many(vs) => vs.last().map(String::as_str).unwrap_or_default(),
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            ParamValue::Single(v) => vec![v],
            ParamValue::Many(vs) => vs,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            ParamValue::Single(first) => {
                let first = std::mem::take(first);
                *self = ParamValue::Many(vec![first, value]);
            }
            ParamValue::Many(vs) => vs.push(value),
        }
    }
}

impl PartialEq<str> for ParamValue {
    fn eq(&self, other: &str) -> bool {
        matches!(self, ParamValue::Single(v) if v == other)
    }
}

impl PartialEq<&str> for ParamValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Query parameters in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
    /// Key to position in `entries`.
    index: HashMap<String, usize>,
}

impl Params {
    /// Decodes a raw query string (without the leading `?`).
    pub fn decode(query: &str, collapse: bool) -> Self {
        let mut params = Params::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params.insert(key, value, collapse);
        }
        params
    }

    fn insert(&mut self, key: &str, value: &str, collapse: bool) {
        match self.index.get(key) {
            Some(&i) => {
                let existing = &mut self.entries[i].1;
                if collapse {
                    *existing = ParamValue::Single(value.to_string());
                } else {
                    existing.push(value.to_string());
                }
            }
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries
                    .push((key.to_string(), ParamValue::Single(value.to_string())));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Uniform view: every key maps to a list of its values.
    pub fn into_lists(self) -> Vec<(String, Vec<String>)> {
        self.entries
            .into_iter()
            .map(|(k, v)| (k, v.into_vec()))
            .collect()
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(v: &str) -> ParamValue {
        ParamValue::Single(v.to_string())
    }

    fn many(vs: &[&str]) -> ParamValue {
        ParamValue::Many(vs.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn distinct_keys_same_in_both_views() {
        for collapse in [true, false] {
            let p = Params::decode("a=b&c=d", collapse);
            assert_eq!(p.len(), 2);
            assert_eq!(p.get("a"), Some(&single("b")));
            assert_eq!(p.get("c"), Some(&single("d")));
        }
    }

    #[test]
    fn repeated_keys() {
        let collapsed = Params::decode("a=b&a=c&a=d", true);
        assert_eq!(collapsed.len(), 1);
        assert_eq!(collapsed.get("a"), Some(&single("d")));

        let all = Params::decode("a=b&a=c&a=d", false);
        assert_eq!(all.get("a"), Some(&many(&["b", "c", "d"])));
    }

    #[test]
    fn mixed_single_and_repeated() {
        let p = Params::decode("x=1&y=2&x=3", false);
        assert_eq!(p.get("x"), Some(&many(&["1", "3"])));
        assert_eq!(p.get("y"), Some(&single("2")));
        assert_eq!(p.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn raw_values_are_not_decoded() {
        let p = Params::decode("q=a%20b+c&k=v=w", true);
        assert_eq!(p.get("q").unwrap(), "a%20b+c");
        assert_eq!(p.get("k").unwrap(), "v=w");
    }

    #[test]
    fn bare_keys_and_empty_pairs() {
        let p = Params::decode("flag&&a=&b=1", true);
        assert_eq!(p.keys().collect::<Vec<_>>(), vec!["flag", "a", "b"]);
        assert_eq!(p.get("flag").unwrap(), "");
        assert_eq!(p.get("a").unwrap(), "");
        assert!(Params::decode("", true).is_empty());
        assert!(Params::decode("&&", false).is_empty());
    }

    #[test]
    fn many_keys_keep_first_appearance_order() {
        let query: Vec<String> = (0..5000)
            .map(|i| format!("k{}={}", i % 2500, i))
            .collect();
        let p = Params::decode(&query.join("&"), false);
        assert_eq!(p.len(), 2500);
        assert_eq!(p.keys().next(), Some("k0"));
        assert_eq!(p.keys().last(), Some("k2499"));
        assert_eq!(
            p.get("k7"),
            Some(&ParamValue::Many(vec!["7".into(), "2507".into()]))
        );
        assert!(p.contains_key("k2499"));
        assert!(!p.contains_key("k2500"));

        let collapsed = Params::decode(&query.join("&"), true);
        assert_eq!(collapsed.get("k0").unwrap(), "2500");
    }

    #[test]
    fn uniform_list_adapter() {
        let lists = Params::decode("a=1&b=2&a=3", false).into_lists();
        assert_eq!(
            lists,
            vec![
                ("a".to_string(), vec!["1".to_string(), "3".to_string()]),
                ("b".to_string(), vec!["2".to_string()]),
            ]
        );
        assert_eq!(single("x").as_slice(), &["x".to_string()]);
        assert_eq!(many(&["1", "2"]).last(), "2");
    }
}

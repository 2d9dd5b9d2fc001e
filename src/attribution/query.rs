//! Ordered query-parameter multi-map.

use std::borrow::Borrow;
use url::form_urlencoded;

/// Query parameters in document order.
///
/// Keys may repeat; lookups return the first occurrence, matching how the
/// browser's `URLSearchParams.get` behaves. The order in which pairs were
/// inserted is preserved when the map is serialized back to a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a raw query string (without the leading `?`).
    ///
    /// Percent-encoded keys and values are decoded; pairs keep their
    /// original order.
    pub fn from_query(raw: &str) -> Self {
        Self(
            form_urlencoded::parse(raw.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        )
    }

    /// Returns the first value for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns whether `name` is present, regardless of its value.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(k, _)| k == name)
    }

    /// Appends a pair at the end of the map.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serializes the map back to `application/x-www-form-urlencoded` text.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.0 {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Borrow<str>,
    V: Borrow<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.borrow().to_string(), v.borrow().to_string()))
                .collect(),
        )
    }
}

//! Query parameter map
//!
//! Parsing and serialization go through `url::form_urlencoded`, so encoding
//! follows `application/x-www-form-urlencoded` (space as `+`, reserved
//! characters percent-escaped).

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use url::form_urlencoded;
use url::Url;

/// The query parameters of a URL, as a string-to-string mapping
///
/// Keys are kept sorted, so serializing the same parameters always yields
/// the same string. Repeated keys resolve to the last value seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the query part of `input`
    ///
    /// Accepts a bare query (`limit=10`), a leading-`?` query (`?limit=10`),
    /// an absolute URL, or a relative URL (`/api/sites/?limit=10`). Anything
    /// after `#` is ignored. A path without a query yields no parameters.
    pub fn parse(input: &str) -> Self {
        if let Ok(url) = Url::parse(input) {
            return Self::from_url(&url);
        }

        let input = input.split_once('#').map_or(input, |(before, _)| before);
        let query = match input.split_once('?') {
            Some((_, query)) => query,
            None if input.starts_with('/') => "",
            None => input,
        };
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()).into_owned())
    }

    /// Read the query parameters of a parsed URL
    pub fn from_url(url: &Url) -> Self {
        Self::from_pairs(url.query_pairs().into_owned())
    }

    /// Build from key/value pairs; later pairs win on duplicate keys
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        params.extend(pairs);
        params
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Get a parameter as a non-negative integer
    ///
    /// Returns `Ok(None)` when the key is absent and an error when the value
    /// is present but not an integer.
    pub fn get_u64(&self, key: &str) -> Result<Option<u64>> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw.trim().parse::<u64>().map(Some).map_err(|e| {
                Error::invalid_field(key, format!("'{raw}' is not a non-negative integer: {e}"))
            }),
        }
    }

    /// Decode a boolean flag, see [`qp_bool`](crate::query::qp_bool)
    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(value) => super::is_truthy(value),
            None => default,
        }
    }

    /// Check whether a parameter is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Set a parameter, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        self.params.insert(key.into(), value.to_string())
    }

    /// Remove a parameter
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    /// Copy of these parameters with one key overwritten
    #[must_use]
    pub fn with(&self, key: impl Into<String>, value: impl ToString) -> Self {
        let mut params = self.clone();
        params.insert(key, value);
        params
    }

    /// Overwrite parameters from key/value pairs
    pub fn extend<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.params.insert(key.into(), value.into());
        }
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize as a form-encoded query string without the leading `?`
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Serialize as a navigable query string with a leading `?`
    pub fn to_query_string(&self) -> String {
        format!("?{}", self.encode())
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl From<&Url> for QueryParams {
    fn from(url: &Url) -> Self {
        Self::from_url(url)
    }
}

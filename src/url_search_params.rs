use crate::compat::{String, ToString, Vec};
use crate::encoding::{form_decode, form_encode_into};

/// Ordered, multi-valued query parameters (the query state of an address).
///
/// Pairs keep their original order and keys may repeat, which is how a
/// filter set travels in a URL: `?i=rust&i=web`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlSearchParams {
    params: Vec<(String, String)>,
}

impl UrlSearchParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        if query.is_empty() {
            return Self::new();
        }

        let params: Vec<(String, String)> = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (form_decode(key), form_decode(value)),
                None => (form_decode(pair), String::new()),
            })
            .collect();

        tracing::trace!(pairs = params.len(), "parsed query");
        Self { params }
    }

    pub fn append(&mut self, key: &str, value: &str) {
        self.params.push((key.to_string(), value.to_string()));
    }

    /// Delete pairs with the given key.
    /// If `value` is provided, only deletes pairs matching both key and value.
    /// Otherwise, deletes all pairs with the given key.
    pub fn delete(&mut self, key: &str, value: Option<&str>) {
        if let Some(val) = value {
            self.params.retain(|(k, v)| k != key || v != val);
        } else {
            self.params.retain(|(k, _)| k != key);
        }
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Check if a key exists.
    /// If `value` is provided, checks for a specific key-value pair.
    pub fn has(&self, key: &str, value: Option<&str>) -> bool {
        if let Some(val) = value {
            self.params.iter().any(|(k, v)| k == key && v == val)
        } else {
            self.params.iter().any(|(k, _)| k == key)
        }
    }

    /// Set a key to a single value, replacing all existing values for that key.
    /// The value takes the position of the first existing pair, or is appended.
    pub fn set(&mut self, key: &str, value: &str) {
        let mut found_first = false;
        self.params.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if found_first {
                return false;
            }
            found_first = true;
            *v = value.to_string();
            true
        });
        if !found_first {
            self.params.push((key.to_string(), value.to_string()));
        }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Number of pairs (WHATWG `size`, same as `len`).
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }

    /// Query string with leading `?`, or empty string if no parameters.
    pub fn serialize(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }

        let mut result = String::from("?");
        self.write_pairs(&mut result);
        result
    }

    fn write_pairs(&self, buffer: &mut String) {
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            form_encode_into(buffer, key);
            buffer.push('=');
            form_encode_into(buffer, value);
        }
    }
}

/// Query string without leading `?` (`URLSearchParams.toString()`).
impl core::fmt::Display for UrlSearchParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buffer = String::new();
        self.write_pairs(&mut buffer);
        f.write_str(&buffer)
    }
}

impl From<&str> for UrlSearchParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for UrlSearchParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UrlSearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

//! Accumulating token store
//!
//! Token values are built up piece by piece by the caller, typically one
//! generated line at a time, and are substituted into the template during
//! generation.

use indexmap::IndexMap;

use crate::templates::LINE_TERMINATOR;

/// Ordered mapping from token key to its accumulated value
///
/// Iteration follows insertion order of the keys, which keeps generation
/// deterministic when several keys could match the same template line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    values: IndexMap<String, String>,
}

impl TokenMap {
    /// Create an empty token map
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text to the value of `key`, creating the key if needed
    pub fn append(&mut self, key: impl Into<String>, text: &str) {
        self.values.entry(key.into()).or_default().push_str(text);
    }

    /// Append a line of text, followed by a line terminator, to the value of `key`
    pub fn append_line(&mut self, key: impl Into<String>, line: &str) {
        let value = self.values.entry(key.into()).or_default();
        value.push_str(line);
        value.push_str(LINE_TERMINATOR);
    }

    /// Get the accumulated value of a token
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check if a token has been appended to
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct token keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no token has been appended yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Token keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Token key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

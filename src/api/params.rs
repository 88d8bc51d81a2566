//! Query parameter sets and their merge rule
//!
//! Operations usually assemble parameters from several sources: a required
//! field, a handful of optional flags, and sometimes a passthrough bag from
//! the caller. Each source is built as its own [`Params`] value and the
//! sources are combined once with [`Params::merge`], where later sources
//! overwrite earlier ones key by key.
//!
//! Empty optional values are dropped. Sending an explicit empty value (to
//! clear a field such as a card's due date) goes through [`Params::clear`].

use std::collections::BTreeMap;

/// A flat string-to-string parameter mapping, one value per key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: BTreeMap<String, String>,
}

impl Params {
    /// Create an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a required parameter. Kept even when the value is empty.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Set an optional parameter. `None` and empty values are omitted.
    #[must_use]
    pub fn opt<V: Into<String>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value.map(Into::<String>::into) {
            Some(v) if !v.is_empty() => self.set(key, v),
            _ => self,
        }
    }

    /// Set a boolean parameter as `true`/`false`. `None` is omitted.
    #[must_use]
    pub fn flag(self, key: impl Into<String>, value: Option<bool>) -> Self {
        match value {
            Some(v) => self.set(key, if v { "true" } else { "false" }),
            None => self,
        }
    }

    /// Send the parameter with an explicit empty value, asking the API to
    /// clear the field.
    #[must_use]
    pub fn clear(self, key: impl Into<String>) -> Self {
        self.set(key, String::new())
    }

    /// Merge parameter sources in order. For a key present in several
    /// sources the value from the last one wins.
    #[must_use]
    pub fn merge<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut merged = Self::new();
        for source in sources {
            merged.entries.extend(source.entries);
        }
        merged
    }

    /// Get the value of a parameter
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether a parameter is present
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |params, (k, v)| params.set(k, v))
    }
}

//! In-memory mapping store: obfuscated key → identifier
//!
//! Hash-based, no ordering. Persisted order is decided by the codec on save.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// Separator marking a type-parameterized ("types" group) key
pub const TYPE_SEPARATOR: &str = "::";

/// Root-namespace marker prefixed onto bare keys
pub const ROOT_MARKER: char = '.';

/// True when `key` belongs to the "types" group
pub fn is_type_key(key: &str) -> bool {
    key.contains(TYPE_SEPARATOR)
}

/// Prefix a bare key (no `.` and no `::`) with the root marker
///
/// ```
/// use dme::store::normalize_key;
///
/// assert_eq!(normalize_key("Foo"), ".Foo");
/// assert_eq!(normalize_key("a.Foo"), "a.Foo");
/// assert_eq!(normalize_key("Foo::1"), "Foo::1");
/// ```
pub fn normalize_key(key: &str) -> Cow<'_, str> {
    if key.contains(ROOT_MARKER) || is_type_key(key) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(format!("{ROOT_MARKER}{key}"))
    }
}

/// A single mapping entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entry {
    /// Obfuscated name (primary key)
    pub key: String,
    /// Human-readable identifier
    pub identifier: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            identifier: identifier.into(),
        }
    }
}

/// Mapping from obfuscated key to identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapStore {
    entries: HashMap<String, String>,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or overwrite, returning the previous identifier
    pub fn set(&mut self, key: impl Into<String>, identifier: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), identifier.into())
    }

    /// Remove `key`; true iff it existed
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Snapshot of all entries (unordered)
    pub fn entries(&self) -> Vec<Entry> {
        self.iter().map(|(k, v)| Entry::new(k, v)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of unique identifier values
    pub fn distinct_identifier_count(&self) -> usize {
        self.entries.values().collect::<HashSet<_>>().len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for MapStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for MapStore {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

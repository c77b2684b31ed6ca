//! Query and maintenance operations over a [`MapStore`]
//!
//! Pure functions: nothing here touches the filesystem. Persisting the result
//! of a mutation is the caller's job (see [`crate::editor::Editor`]).

use std::path::{Path, PathBuf};

use crate::codec::{has_gzip_suffix, Compression, GZIP_SUFFIX};
use crate::identifier::is_valid_identifier;
use crate::store::{normalize_key, Entry, MapStore};

/// Case-insensitive substring search over keys and identifiers
///
/// Results are ordered by key.
pub fn search(store: &MapStore, term: &str) -> Vec<Entry> {
    let needle = term.to_lowercase();
    let mut matches: Vec<Entry> = store
        .iter()
        .filter(|(key, identifier)| {
            key.to_lowercase().contains(&needle) || identifier.to_lowercase().contains(&needle)
        })
        .map(|(key, identifier)| Entry::new(key, identifier))
        .collect();
    matches.sort();
    matches
}

/// Entries whose identifier equals `identifier` exactly (case-sensitive)
pub fn entries_with_identifier(store: &MapStore, identifier: &str) -> Vec<Entry> {
    let mut matches: Vec<Entry> = store
        .iter()
        .filter(|(_, value)| *value == identifier)
        .map(|(key, value)| Entry::new(key, value))
        .collect();
    matches.sort();
    matches
}

/// Point every entry mapped to `old` at `new`
///
/// Returns the number of entries changed; 0 means no match and no mutation.
pub fn rename_identifier(store: &mut MapStore, old: &str, new: &str) -> usize {
    let matches = entries_with_identifier(store, old);
    for entry in &matches {
        store.set(entry.key.clone(), new);
    }
    matches.len()
}

/// Insert under the normalized key, returning the key actually stored
pub fn add_entry(store: &mut MapStore, key: &str, identifier: &str) -> String {
    let key = normalize_key(key).into_owned();
    store.set(key.clone(), identifier);
    key
}

/// Entries whose identifier fails [`is_valid_identifier`], ordered by key
pub fn invalid_entries(store: &MapStore) -> Vec<Entry> {
    let mut invalid: Vec<Entry> = store
        .iter()
        .filter(|(_, identifier)| !is_valid_identifier(identifier))
        .map(|(key, identifier)| Entry::new(key, identifier))
        .collect();
    invalid.sort();
    invalid
}

/// Remove every listed key; returns how many were present
pub fn remove_entries(store: &mut MapStore, entries: &[Entry]) -> usize {
    entries
        .iter()
        .filter(|entry| store.remove(&entry.key))
        .count()
}

/// Flip framing and adjust the `.gz` suffix to match
///
/// ```
/// use dme::codec::Compression;
/// use dme::ops::toggled;
/// use std::path::{Path, PathBuf};
///
/// let (path, compression) = toggled(Path::new("m.csv"), Compression::Plain);
/// assert_eq!(path, PathBuf::from("m.csv.gz"));
/// assert_eq!(compression, Compression::Gzip);
/// ```
pub fn toggled(path: &Path, compression: Compression) -> (PathBuf, Compression) {
    let next = compression.toggled();
    let raw = path.to_string_lossy();

    let new_path = match next {
        Compression::Plain if has_gzip_suffix(path) => {
            PathBuf::from(&raw[..raw.len() - GZIP_SUFFIX.len()])
        }
        Compression::Gzip if !has_gzip_suffix(path) => PathBuf::from(format!("{raw}{GZIP_SUFFIX}")),
        _ => path.to_path_buf(),
    };

    (new_path, next)
}

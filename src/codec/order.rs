//! Deterministic output ordering
//!
//! Classes sort by identifier; types sort by the name before `::` with a
//! numeric `_<digits>` suffix compared as a number. Every ordering ends with
//! the ordinal key so the result is total and saves are byte-stable.

use regex::Regex;
use std::sync::OnceLock;

use crate::store::{Entry, TYPE_SEPARATOR};

fn numeric_suffix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"_\d+\b").expect("numeric suffix pattern compiles"))
}

/// Sort the classes group: identifier, then key (case-insensitive)
pub(crate) fn sort_classes(entries: &mut [Entry]) {
    entries.sort_by_cached_key(|e| {
        (
            e.identifier.to_lowercase(),
            e.key.to_lowercase(),
            e.key.clone(),
        )
    });
}

/// Sort the types group by [`type_sort_key`], then key (case-insensitive)
pub(crate) fn sort_types(entries: &mut [Entry]) {
    entries.sort_by_cached_key(|e| {
        let (base, number) = type_sort_key(&e.key);
        (base, number, e.key.to_lowercase(), e.key.clone())
    });
}

/// Split the pre-`::` segment into (lowercased base, numeric suffix)
///
/// An absent suffix sorts after every real number.
pub(crate) fn type_sort_key(key: &str) -> (String, u64) {
    let head = key.split(TYPE_SEPARATOR).next().unwrap_or(key);

    match numeric_suffix().find_iter(head).last() {
        Some(m) => {
            let number = m.as_str()[1..].parse().unwrap_or(u64::MAX);
            let base = format!("{}{}", &head[..m.start()], &head[m.end()..]);
            (base.to_lowercase(), number)
        }
        None => (head.to_lowercase(), u64::MAX),
    }
}

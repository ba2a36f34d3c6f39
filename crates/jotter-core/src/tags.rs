//! Helpers for the comma-separated tags field.

use std::collections::BTreeSet;

/// Split a tags field into trimmed, non-empty tokens.
pub fn split_tags(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Deduplicate tag tokens across many tags fields. Returns a sorted
/// vector.
pub fn collect_distinct<'a, I>(fields: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut set = BTreeSet::new();
    for field in fields {
        for tag in split_tags(field) {
            set.insert(tag);
        }
    }
    set.into_iter().collect()
}

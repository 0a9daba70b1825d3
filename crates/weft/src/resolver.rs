//! Key-path resolution over a locale table.

use crate::types::{LocaleNode, Resolved};

/// Walk `key` segment by segment from `root`.
///
/// Each `.`-separated segment must name an existing entry of the current
/// mapping. The walk stops with [`Resolved::Miss`] carrying the untouched
/// key as soon as a segment is absent or a leaf is reached before the path
/// ends. Empty strings and empty lists are values, not misses.
pub fn resolve<'a>(root: &'a LocaleNode, key: &'a str) -> Resolved<'a> {
    let mut value = root;
    for segment in key.split('.') {
        match value.get(segment) {
            Some(next) => value = next,
            None => return Resolved::Miss(key),
        }
    }
    Resolved::from_node(value)
}

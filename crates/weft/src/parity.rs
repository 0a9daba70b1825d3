//! Structural comparison of two locale tables.
//!
//! Tables are allowed to drift apart; nothing at load time rejects a key
//! that exists in only one language. These checks exist for development
//! tooling that reports untranslated or stray copy.

use std::collections::BTreeMap;

use strsim::levenshtein;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::resolver::resolve;
use crate::types::{Language, LocaleNode, Shape};

/// A difference between a source table and a translation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParityWarning {
    /// The source defines a key the translation lacks.
    #[error("'{key}' is missing in {language}")]
    MissingKey { key: String, language: Language },

    /// The translation defines a key the source does not.
    #[error("'{key}' in {language} does not exist in the source{}", format_suggestions(suggestions))]
    UnknownKey {
        key: String,
        language: Language,
        suggestions: Vec<String>,
    },

    /// The same key holds different kinds of value.
    #[error("'{key}' is a {found} in {language}, expected a {expected}")]
    ShapeMismatch {
        key: String,
        language: Language,
        expected: Shape,
        found: Shape,
    },

    /// Both tables hold a list at the key, with different lengths.
    #[error("'{key}' has {found} items in {language}, expected {expected}")]
    ListLengthMismatch {
        key: String,
        language: Language,
        expected: usize,
        found: usize,
    },
}

impl ParityWarning {
    /// The key path the warning is about.
    pub fn key(&self) -> &str {
        match self {
            ParityWarning::MissingKey { key, .. }
            | ParityWarning::UnknownKey { key, .. }
            | ParityWarning::ShapeMismatch { key, .. }
            | ParityWarning::ListLengthMismatch { key, .. } => key,
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Translation coverage of one language against the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coverage {
    pub language: Language,
    /// Source leaf keys that resolve in the target.
    pub translated: usize,
    /// Number of leaf keys in the source.
    pub total: usize,
    /// Source leaf keys that miss in the target, sorted.
    pub missing: Vec<String>,
}

/// Every leaf key path of a table, sorted.
///
/// Strings and lists are leaves; list items are not descended into.
pub fn key_paths(node: &LocaleNode) -> Vec<String> {
    let mut leaves = BTreeMap::new();
    collect_leaves(node, "", &mut leaves);
    leaves.into_keys().collect()
}

fn collect_leaves<'a>(node: &'a LocaleNode, prefix: &str, out: &mut BTreeMap<String, &'a LocaleNode>) {
    match node {
        LocaleNode::Map(entries) => {
            for (key, child) in entries {
                collect_leaves(child, &join(prefix, key), out);
            }
        }
        LocaleNode::Text(_) | LocaleNode::List(_) => {
            out.insert(prefix.to_string(), node);
        }
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Compare the `target` table against the `source` table.
///
/// Returns warnings sorted by key. Keys only present in the target carry up
/// to three similar source keys as suggestions.
///
/// # Example
///
/// ```
/// use weft::{Catalog, Language, ParityWarning, validate_parity};
///
/// let catalog = Catalog::from_json_strs(
///     r#"{ "nav": { "work": "Work", "about": "About" } }"#,
///     r#"{ "nav": { "work": "Projekti" } }"#,
/// ).unwrap();
///
/// let warnings = validate_parity(&catalog, Language::En, Language::Sl);
/// assert_eq!(warnings, vec![ParityWarning::MissingKey {
///     key: "nav.about".to_string(),
///     language: Language::Sl,
/// }]);
/// ```
pub fn validate_parity(catalog: &Catalog, source: Language, target: Language) -> Vec<ParityWarning> {
    let source_root = catalog.table(source);
    let available = key_paths(source_root);
    let mut warnings = Vec::new();
    compare(
        "",
        source_root,
        catalog.table(target),
        target,
        &available,
        &mut warnings,
    );
    warnings.sort_by(|a, b| a.key().cmp(b.key()));
    warnings
}

fn compare(
    path: &str,
    source: &LocaleNode,
    target: &LocaleNode,
    language: Language,
    available: &[String],
    out: &mut Vec<ParityWarning>,
) {
    match (source, target) {
        (LocaleNode::Map(source_entries), LocaleNode::Map(target_entries)) => {
            for (key, source_child) in source_entries {
                let child_path = join(path, key);
                match target_entries.get(key) {
                    Some(target_child) => {
                        compare(&child_path, source_child, target_child, language, available, out);
                    }
                    None => {
                        for key in subtree_keys(source_child, &child_path) {
                            out.push(ParityWarning::MissingKey { key, language });
                        }
                    }
                }
            }
            for (key, target_child) in target_entries {
                if source_entries.contains_key(key) {
                    continue;
                }
                for key in subtree_keys(target_child, &join(path, key)) {
                    let suggestions = compute_suggestions(&key, available);
                    out.push(ParityWarning::UnknownKey {
                        key,
                        language,
                        suggestions,
                    });
                }
            }
        }
        (LocaleNode::List(source_items), LocaleNode::List(target_items)) => {
            if source_items.len() != target_items.len() {
                out.push(ParityWarning::ListLengthMismatch {
                    key: path.to_string(),
                    language,
                    expected: source_items.len(),
                    found: target_items.len(),
                });
            }
        }
        (LocaleNode::Text(_), LocaleNode::Text(_)) => {}
        _ => out.push(ParityWarning::ShapeMismatch {
            key: path.to_string(),
            language,
            expected: source.shape(),
            found: target.shape(),
        }),
    }
}

/// Leaf keys under `node`, with `node` itself at `path`.
fn subtree_keys(node: &LocaleNode, path: &str) -> Vec<String> {
    let mut leaves = BTreeMap::new();
    collect_leaves(node, path, &mut leaves);
    leaves.into_keys().collect()
}

/// How much of the `source` table resolves in `target`.
pub fn coverage(catalog: &Catalog, source: Language, target: Language) -> Coverage {
    let keys = key_paths(catalog.table(source));
    let target_root = catalog.table(target);
    let missing: Vec<String> = keys
        .iter()
        .filter(|key| resolve(target_root, key).is_miss())
        .cloned()
        .collect();
    Coverage {
        language: target,
        translated: keys.len() - missing.len(),
        total: keys.len(),
        missing,
    }
}

/// Keys from `available` within a small edit distance of `key`, closest
/// first, at most three.
///
/// Keys of three characters or fewer allow one edit; longer keys allow two.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut candidates: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    candidates.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    candidates
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

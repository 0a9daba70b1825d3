use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// A node of a locale table.
///
/// Leaves are strings or ordered lists (of strings or of records); every
/// other node is a mapping from segment names to child nodes. The JSON
/// representation is the natural one: strings, arrays and objects.
///
/// # Example
///
/// ```
/// use weft::LocaleNode;
///
/// let nav = LocaleNode::map([("work", LocaleNode::from("Work"))]);
/// assert_eq!(nav.get("work"), Some(&LocaleNode::from("Work")));
/// assert_eq!(nav.get("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocaleNode {
    /// A translated string.
    Text(String),

    /// An ordered list of strings or records.
    List(Vec<LocaleNode>),

    /// A mapping from key segment to child node.
    Map(BTreeMap<String, LocaleNode>),
}

/// The structural kind of a [`LocaleNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Text,
    List,
    Record,
}

impl LocaleNode {
    /// Build a mapping node from `(segment, child)` pairs.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, LocaleNode)>) -> LocaleNode {
        LocaleNode::Map(
            entries
                .into_iter()
                .map(|(key, node)| (key.into(), node))
                .collect(),
        )
    }

    /// Build a list node.
    pub fn list(items: impl IntoIterator<Item = LocaleNode>) -> LocaleNode {
        LocaleNode::List(items.into_iter().collect())
    }

    pub fn shape(&self) -> Shape {
        match self {
            LocaleNode::Text(_) => Shape::Text,
            LocaleNode::List(_) => Shape::List,
            LocaleNode::Map(_) => Shape::Record,
        }
    }

    /// Look up a direct child by exact segment name.
    ///
    /// Always `None` for leaves.
    pub fn get(&self, segment: &str) -> Option<&LocaleNode> {
        match self {
            LocaleNode::Map(entries) => entries.get(segment),
            LocaleNode::Text(_) | LocaleNode::List(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            LocaleNode::Text(text) => Some(text),
            LocaleNode::List(_) | LocaleNode::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, LocaleNode>> {
        match self {
            LocaleNode::Map(entries) => Some(entries),
            LocaleNode::Text(_) | LocaleNode::List(_) => None,
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Shape::Text => "text",
            Shape::List => "list",
            Shape::Record => "record",
        })
    }
}

impl From<&str> for LocaleNode {
    fn from(text: &str) -> Self {
        LocaleNode::Text(text.to_string())
    }
}

impl From<String> for LocaleNode {
    fn from(text: String) -> Self {
        LocaleNode::Text(text)
    }
}

impl From<Vec<LocaleNode>> for LocaleNode {
    fn from(items: Vec<LocaleNode>) -> Self {
        LocaleNode::List(items)
    }
}

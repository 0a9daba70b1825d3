use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use super::{LocaleNode, Shape};

/// The outcome of resolving a key path against a locale table.
///
/// A miss is an ordinary value, not an error: it carries the original key,
/// which is also the text rendered in place of the missing translation.
///
/// # Example
///
/// ```
/// use weft::{LocaleNode, Resolved, resolve};
///
/// let table = LocaleNode::map([("nav", LocaleNode::map([("work", "Work".into())]))]);
///
/// assert_eq!(resolve(&table, "nav.work"), Resolved::Text("Work"));
/// assert_eq!(resolve(&table, "nav.missing"), Resolved::Miss("nav.missing"));
/// assert_eq!(resolve(&table, "nav.missing").text_or_key(), Some("nav.missing"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// The path ends at a string.
    Text(&'a str),

    /// The path ends at an ordered list.
    List(&'a [LocaleNode]),

    /// The path ends at a mapping.
    Record(&'a BTreeMap<String, LocaleNode>),

    /// The path could not be walked; holds the key exactly as given.
    Miss(&'a str),
}

impl<'a> Resolved<'a> {
    /// Wrap a node found at the end of a successful walk.
    pub fn from_node(node: &'a LocaleNode) -> Resolved<'a> {
        match node {
            LocaleNode::Text(text) => Resolved::Text(text),
            LocaleNode::List(items) => Resolved::List(items),
            LocaleNode::Map(entries) => Resolved::Record(entries),
        }
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, Resolved::Miss(_))
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Resolved::Text(text) => Some(text),
            Resolved::List(_) | Resolved::Record(_) | Resolved::Miss(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&'a [LocaleNode]> {
        match *self {
            Resolved::List(items) => Some(items),
            Resolved::Text(_) | Resolved::Record(_) | Resolved::Miss(_) => None,
        }
    }

    pub fn as_record(&self) -> Option<&'a BTreeMap<String, LocaleNode>> {
        match *self {
            Resolved::Record(entries) => Some(entries),
            Resolved::Text(_) | Resolved::List(_) | Resolved::Miss(_) => None,
        }
    }

    /// The string to render in place of prose: the text for a text leaf, the
    /// raw key for a miss. `None` for lists and records.
    pub fn text_or_key(&self) -> Option<&'a str> {
        match *self {
            Resolved::Text(text) | Resolved::Miss(text) => Some(text),
            Resolved::List(_) | Resolved::Record(_) => None,
        }
    }

    /// The shape of the resolved value, `None` for a miss.
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Resolved::Text(_) => Some(Shape::Text),
            Resolved::List(_) => Some(Shape::List),
            Resolved::Record(_) => Some(Shape::Record),
            Resolved::Miss(_) => None,
        }
    }

    /// An owned copy of the resolved value, `None` for a miss.
    pub fn to_node(&self) -> Option<LocaleNode> {
        match *self {
            Resolved::Text(text) => Some(LocaleNode::Text(text.to_string())),
            Resolved::List(items) => Some(LocaleNode::List(items.to_vec())),
            Resolved::Record(entries) => Some(LocaleNode::Map(entries.clone())),
            Resolved::Miss(_) => None,
        }
    }

    /// Convert the resolved value into a typed structure.
    ///
    /// Returns `None` for a miss or when the value does not have the shape
    /// `T` expects.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Option<T> {
        let value = match *self {
            Resolved::Text(text) => serde_json::to_value(text),
            Resolved::List(items) => serde_json::to_value(items),
            Resolved::Record(entries) => serde_json::to_value(entries),
            Resolved::Miss(_) => return None,
        };
        value.ok().and_then(|value| serde_json::from_value(value).ok())
    }
}

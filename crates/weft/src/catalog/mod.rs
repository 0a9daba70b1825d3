//! The two locale tables the site is published with.
//!
//! A [`Catalog`] holds one table per [`Language`]. Tables are built once,
//! either from the bundled site copy or from JSON files on disk, and are
//! never mutated afterwards.

mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use serde_json::error::Category;
use tracing::debug;

pub use error::LoadError;

use crate::resolver::resolve;
use crate::types::{Language, LocaleNode, Resolved};

const BUNDLED_EN: &str = include_str!("../../locales/en.json");
const BUNDLED_SL: &str = include_str!("../../locales/sl.json");

static BUNDLED: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json_strs(BUNDLED_EN, BUNDLED_SL).expect("bundled locale tables are valid")
});

/// Immutable English and Slovenian locale tables.
///
/// # Example
///
/// ```
/// use weft::{Catalog, Language, Resolved};
///
/// let catalog = Catalog::from_json_strs(
///     r#"{ "nav": { "work": "Work" } }"#,
///     r#"{ "nav": { "work": "Projekti" } }"#,
/// ).unwrap();
///
/// assert_eq!(catalog.resolve(Language::Sl, "nav.work"), Resolved::Text("Projekti"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    en: LocaleNode,
    sl: LocaleNode,
}

impl Catalog {
    /// Build a catalog from two table roots.
    ///
    /// Both roots must be mappings.
    pub fn new(en: LocaleNode, sl: LocaleNode) -> Result<Self, LoadError> {
        for (language, root) in [(Language::En, &en), (Language::Sl, &sl)] {
            if root.as_map().is_none() {
                return Err(LoadError::RootNotMapping {
                    path: default_path(language),
                });
            }
        }
        Ok(Catalog { en, sl })
    }

    /// Parse both tables from JSON source text.
    pub fn from_json_strs(en: &str, sl: &str) -> Result<Self, LoadError> {
        let en = parse_table(en, &default_path(Language::En))?;
        let sl = parse_table(sl, &default_path(Language::Sl))?;
        Ok(Catalog { en, sl })
    }

    /// Load `en.json` and `sl.json` from a directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let en = load_table(&dir.join(format!("{}.json", Language::En.code())))?;
        let sl = load_table(&dir.join(format!("{}.json", Language::Sl.code())))?;
        Ok(Catalog { en, sl })
    }

    /// The site copy compiled into this crate.
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    /// The root node of one language's table.
    pub fn table(&self, language: Language) -> &LocaleNode {
        match language {
            Language::En => &self.en,
            Language::Sl => &self.sl,
        }
    }

    /// Resolve `key` in a specific language, independent of any active
    /// locale selection.
    pub fn resolve<'a>(&'a self, language: Language, key: &'a str) -> Resolved<'a> {
        resolve(self.table(language), key)
    }
}

/// Parse one locale table from JSON text.
///
/// `path` is only used to label errors.
pub fn parse_table(content: &str, path: &Path) -> Result<LocaleNode, LoadError> {
    let root: LocaleNode = serde_json::from_str(content).map_err(|e| {
        let message = match e.classify() {
            Category::Data => {
                "locale values must be strings, arrays or objects".to_string()
            }
            Category::Eof => "unexpected end of file".to_string(),
            Category::Io | Category::Syntax => strip_location(&e.to_string()),
        };
        LoadError::Parse {
            path: path.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message,
        }
    })?;

    let Some(sections) = root.as_map().map(|entries| entries.len()) else {
        return Err(LoadError::RootNotMapping {
            path: path.to_path_buf(),
        });
    };
    debug!(path = %path.display(), sections, "parsed locale table");
    Ok(root)
}

fn load_table(path: &Path) -> Result<LocaleNode, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_table(&content, path)
}

fn default_path(language: Language) -> PathBuf {
    PathBuf::from(format!("<{language}>"))
}

/// serde_json appends " at line X column Y"; the location is reported separately.
fn strip_location(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(index) => message[..index].to_string(),
        None => message.to_string(),
    }
}

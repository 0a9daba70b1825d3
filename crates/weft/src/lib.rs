//! Locale tables and key-path resolution for the WHITEWEAVER Studio website,
//! plus the page metadata and crawler files built from them.
//!
//! Copy is looked up with dot-delimited keys such as `"nav.work"` against
//! the table of the active language. A key that cannot be walked resolves to
//! itself, so untranslated copy shows up as its key instead of failing.

pub mod catalog;
pub mod localizer;
pub mod parity;
pub mod preferences;
pub mod resolver;
pub mod seo;
pub mod site;
pub mod types;

pub use catalog::{Catalog, LoadError};
pub use localizer::Localizer;
pub use parity::{Coverage, ParityWarning, compute_suggestions, coverage, key_paths, validate_parity};
pub use preferences::{FileStore, MemoryStore, PreferenceStore};
pub use resolver::resolve;
pub use types::{Language, LocaleNode, Resolved, Shape, UnknownLanguage};

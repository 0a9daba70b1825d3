//! The locale selection context handed to everything that renders copy.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::catalog::Catalog;
use crate::preferences::{INVERT_COLORS_KEY, LANGUAGE_KEY, MemoryStore, PreferenceStore};
use crate::resolver::resolve;
use crate::types::{Language, LocaleNode, Resolved};

/// Owns the active language and resolves keys against it.
///
/// A `Localizer` is built once at startup from a [`Catalog`] and a
/// [`PreferenceStore`] and passed to whatever needs translated copy. The
/// active language and the color-invert toggle are read from the store when
/// the localizer is created; changing either writes it straight back.
/// Nothing is cached between calls, so every `resolve` reflects the current
/// selection.
///
/// # Example
///
/// ```
/// use weft::{Catalog, Language, Localizer, MemoryStore, Resolved};
///
/// let catalog = Catalog::from_json_strs(
///     r#"{ "nav": { "work": "Work" } }"#,
///     r#"{ "nav": { "work": "Projekti" } }"#,
/// ).unwrap();
/// let mut localizer = Localizer::new(&catalog, MemoryStore::new());
///
/// assert_eq!(localizer.active_locale(), Language::En);
/// assert_eq!(localizer.text("nav.work"), "Work");
///
/// localizer.set_active_locale(Language::Sl);
/// assert_eq!(localizer.resolve("nav.work"), Resolved::Text("Projekti"));
/// assert_eq!(localizer.text("nav.typo"), "nav.typo");
/// ```
#[derive(Debug)]
pub struct Localizer<'c, S: PreferenceStore = MemoryStore> {
    catalog: &'c Catalog,
    store: S,
    language: Language,
    invert_colors: bool,
}

impl<'c, S: PreferenceStore> Localizer<'c, S> {
    /// Create a localizer, restoring preferences from `store`.
    ///
    /// A stored language of exactly `"sl"` selects Slovenian; anything else,
    /// including no stored value, selects English.
    pub fn new(catalog: &'c Catalog, store: S) -> Self {
        let language = match store.get(LANGUAGE_KEY).as_deref() {
            Some("sl") => Language::Sl,
            _ => Language::En,
        };
        let invert_colors = store.get(INVERT_COLORS_KEY).as_deref() == Some("1");
        Localizer {
            catalog,
            store,
            language,
            invert_colors,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give up the context, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    // =========================================================================
    // Language Selection
    // =========================================================================

    pub fn active_locale(&self) -> Language {
        self.language
    }

    /// Switch the active language and persist the choice.
    pub fn set_active_locale(&mut self, language: Language) {
        self.language = language;
        self.store.set(LANGUAGE_KEY, language.code());
        debug!(%language, "switched active locale");
    }

    /// Flip between English and Slovenian, returning the new language.
    pub fn toggle_language(&mut self) -> Language {
        let next = self.language.toggled();
        self.set_active_locale(next);
        next
    }

    // =========================================================================
    // Display Preferences
    // =========================================================================

    pub fn invert_colors(&self) -> bool {
        self.invert_colors
    }

    pub fn set_invert_colors(&mut self, on: bool) {
        self.invert_colors = on;
        self.store.set(INVERT_COLORS_KEY, if on { "1" } else { "0" });
    }

    /// Flip the color-invert toggle, returning the new state.
    pub fn toggle_invert_colors(&mut self) -> bool {
        let next = !self.invert_colors;
        self.set_invert_colors(next);
        next
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve `key` in the active language.
    pub fn resolve<'a>(&'a self, key: &'a str) -> Resolved<'a> {
        resolve(self.catalog.table(self.language), key)
    }

    /// The text to render for `key`.
    ///
    /// Misses render as the key itself. Keys that resolve to a list or a
    /// record have no prose form and render as the key too.
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.resolve(key).as_text().unwrap_or(key)
    }

    /// The list at `key`, empty when the key misses or is not a list.
    pub fn list<'a>(&'a self, key: &'a str) -> &'a [LocaleNode] {
        self.resolve(key).as_list().unwrap_or_default()
    }

    /// The string items of the list at `key`, skipping record items.
    pub fn texts<'a>(&'a self, key: &'a str) -> Vec<&'a str> {
        self.list(key)
            .iter()
            .filter_map(LocaleNode::as_text)
            .collect()
    }

    /// The value at `key` converted into `T`, `None` on a miss or a shape
    /// `T` cannot be built from.
    pub fn records<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.resolve(key).deserialize()
    }
}

//! Persistence for the visitor's display preferences.
//!
//! Two preferences survive a reload: the selected language and the
//! color-invert toggle. Stores are plain synchronous key-value maps with no
//! error channel; a store that fails to persist logs and carries on.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage key for the selected language code.
pub const LANGUAGE_KEY: &str = "language";

/// Storage key for the color-invert toggle, stored as `"1"` or `"0"`.
pub const INVERT_COLORS_KEY: &str = "invert-colors";

/// A synchronous, fire-and-forget key-value store for preferences.
pub trait PreferenceStore {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str);
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

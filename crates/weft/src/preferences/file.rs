use std::collections::BTreeMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::PreferenceStore;

/// A preference store persisted as a flat JSON object on disk.
///
/// The file is read once when the store is opened and rewritten in full on
/// every `set`. A missing file is an empty store. An unreadable or corrupt
/// file is logged and treated as empty; the next `set` overwrites it.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, reading whatever it currently holds.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(values) => values,
                Err(error) => {
                    warn!(path = %path.display(), %error, "ignoring corrupt preferences file");
                    BTreeMap::new()
                }
            },
            Err(error) if error.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to read preferences file");
                BTreeMap::new()
            }
        };
        FileStore { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values).map_err(io::Error::other)?;
        fs::write(&self.path, content)
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        match self.persist() {
            Ok(()) => debug!(path = %self.path.display(), key, value, "saved preference"),
            Err(error) => {
                warn!(path = %self.path.display(), key, %error, "failed to save preference");
            }
        }
    }
}

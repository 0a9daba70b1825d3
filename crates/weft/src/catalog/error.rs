//! Error types for locale table loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while loading locale tables.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a table.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table is not valid JSON, or uses values other than strings,
    /// arrays and objects.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The table parsed, but its root is a string or a list.
    #[error("{path}: locale table root must be an object")]
    RootNotMapping { path: PathBuf },
}

use std::path::PathBuf;

use thiserror::Error;

/// Errors that occur while writing generated site files.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

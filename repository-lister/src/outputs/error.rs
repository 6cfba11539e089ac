//! Step output error types.

use std::path::PathBuf;

/// Errors that can occur while publishing step outputs.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// Appending to an output or summary file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

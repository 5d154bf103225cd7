//! Conversion errors.

use std::path::PathBuf;

/// Errors that can occur while converting sessions.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Projects directory not found: {}", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("Path is not valid UTF-8: {}", .path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("Invalid scan pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

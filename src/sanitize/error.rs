//! Sanitizer errors.

use std::path::PathBuf;

/// Errors that can occur while sanitizing a file.
#[derive(Debug, thiserror::Error)]
pub enum SanitizeError {
    #[error("Cannot specify both an output file and --in-place")]
    ArgumentConflict,

    #[error("Input file {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("Unable to detect valid JSON/JSONL format in {}", .path.display())]
    UnrecognizedFormat { path: PathBuf },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

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
}

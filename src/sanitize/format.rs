//! JSON vs JSON Lines detection.
//!
//! The detector only looks at the first two lines:
//!
//! - blank first line: empty
//! - two independently parseable lines: JSON Lines
//! - one parseable line followed by a blank/absent line: single JSON document
//! - anything else: whatever parsing the whole file as one document says
//!
//! A one-record JSONL file is therefore reported (and rewritten) as JSON.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::IgnoredAny;

use super::error::SanitizeError;

/// Layout of a file handed to the sanitizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// One JSON document, possibly pretty-printed over many lines
    Json,
    /// One JSON value per line
    Jsonl,
    /// Blank first line
    Empty,
    /// Neither of the above
    Unknown,
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Json => write!(f, "JSON"),
            FileFormat::Jsonl => write!(f, "JSONL"),
            FileFormat::Empty => write!(f, "empty"),
            FileFormat::Unknown => write!(f, "unknown"),
        }
    }
}

/// Classify the file at `path`.
pub fn detect(path: &Path) -> Result<FileFormat, SanitizeError> {
    let content = fs::read_to_string(path).map_err(|source| SanitizeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(detect_str(&content))
}

/// Classify file contents.
pub fn detect_str(content: &str) -> FileFormat {
    let mut lines = content.lines();

    let first = lines.next().unwrap_or_default().trim();
    if first.is_empty() {
        return FileFormat::Empty;
    }

    if is_json(first) {
        let second = lines.next().unwrap_or_default().trim();
        if second.is_empty() {
            return FileFormat::Json;
        }
        if is_json(second) {
            return FileFormat::Jsonl;
        }
    }

    if is_json(content) {
        FileFormat::Json
    } else {
        FileFormat::Unknown
    }
}

fn is_json(text: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(text).is_ok()
}

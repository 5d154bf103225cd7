//! Secret redaction for JSON and JSON Lines exports.
//!
//! # Module Structure
//!
//! - [`rules`] - the ordered built-in pattern/replacement list
//! - [`engine`] - applies rules to text and, recursively, to JSON values
//! - [`format`] - tells single JSON documents from JSON Lines
//! - [`file`] - reads, sanitizes and writes whole files

pub mod engine;
mod error;
pub mod file;
pub mod format;
pub mod rules;

pub use engine::{preview, Redactor, RuleMatches};
pub use error::SanitizeError;
pub use file::{
    dry_run, resolve_output, sanitize_file, sanitize_json_str, sanitize_jsonl_str, DryRunReport,
    SanitizeReport,
};
pub use format::{detect, detect_str, FileFormat};
pub use rules::{builtin_rules, RedactionRule};

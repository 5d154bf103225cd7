//! File-level sanitization.
//!
//! JSON documents are loaded whole, redacted and written back pretty-printed.
//! JSON Lines files are redacted record by record and written back one
//! compact record per line; lines that fail to parse are redacted as plain
//! text instead of aborting the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::engine::{Redactor, RuleMatches};
use super::error::SanitizeError;
use super::format::{detect_str, FileFormat};

/// Summary of one sanitized file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeReport {
    pub format: FileFormat,
    /// JSON records processed (1 for a JSON document)
    pub lines_processed: usize,
    /// JSONL lines that were not valid JSON and got text redaction
    pub malformed_lines: usize,
    /// Compact serialized size of the input records
    pub input_bytes: usize,
    /// Compact serialized size of the sanitized records
    pub output_bytes: usize,
    /// Replacement markers found in the sanitized output
    pub redactions: usize,
}

impl SanitizeReport {
    fn empty(format: FileFormat) -> Self {
        Self {
            format,
            lines_processed: 0,
            malformed_lines: 0,
            input_bytes: 0,
            output_bytes: 0,
            redactions: 0,
        }
    }
}

/// What a dry run would have redacted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryRunReport {
    pub format: FileFormat,
    pub redactions: usize,
    /// Matches per rule, found in the serialized original
    pub matches: Vec<RuleMatches>,
}

/// Work out where sanitized output goes.
///
/// No explicit output means in place. Naming an output file and asking for
/// in-place editing at the same time is rejected.
pub fn resolve_output(
    input: &Path,
    output: Option<&Path>,
    in_place: bool,
) -> Result<PathBuf, SanitizeError> {
    match (output, in_place) {
        (Some(_), true) => Err(SanitizeError::ArgumentConflict),
        (Some(output), false) => Ok(output.to_path_buf()),
        (None, _) => Ok(input.to_path_buf()),
    }
}

/// Sanitize `input` into `output` (which may be the same path).
///
/// The input is read completely before anything is written, so in-place
/// runs never truncate the source mid-read.
pub fn sanitize_file(
    redactor: &Redactor<'_>,
    input: &Path,
    output: &Path,
) -> Result<SanitizeReport, SanitizeError> {
    let content = read_input(input)?;
    let format = detect_str(&content);
    tracing::debug!(input = %input.display(), %format, "detected file format");

    match format {
        FileFormat::Json => {
            let (sanitized, report) =
                sanitize_json_str(redactor, &content).map_err(|source| {
                    SanitizeError::InvalidJson {
                        path: input.to_path_buf(),
                        source,
                    }
                })?;
            write_output(output, &sanitized)?;
            Ok(report)
        }
        FileFormat::Jsonl => {
            let (sanitized, report) = sanitize_jsonl_str(redactor, &content);
            write_output(output, &sanitized)?;
            Ok(report)
        }
        FileFormat::Empty => {
            if output != input {
                write_output(output, "")?;
            }
            Ok(SanitizeReport::empty(FileFormat::Empty))
        }
        FileFormat::Unknown => Err(SanitizeError::UnrecognizedFormat {
            path: input.to_path_buf(),
        }),
    }
}

/// Report what sanitizing `input` would change, without writing anything.
pub fn dry_run(redactor: &Redactor<'_>, input: &Path) -> Result<DryRunReport, SanitizeError> {
    let content = read_input(input)?;
    let format = detect_str(&content);

    let (original, sanitized) = match format {
        FileFormat::Json => {
            let value: Value =
                serde_json::from_str(&content).map_err(|source| SanitizeError::InvalidJson {
                    path: input.to_path_buf(),
                    source,
                })?;
            (value.to_string(), redactor.redact_value(&value).to_string())
        }
        FileFormat::Jsonl => {
            let mut original = Vec::new();
            let mut sanitized = Vec::new();
            for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
                match serde_json::from_str::<Value>(line) {
                    Ok(value) => {
                        original.push(value.to_string());
                        sanitized.push(redactor.redact_value(&value).to_string());
                    }
                    Err(_) => {
                        original.push(line.to_string());
                        sanitized.push(redactor.redact_text(line));
                    }
                }
            }
            (original.join("\n"), sanitized.join("\n"))
        }
        FileFormat::Empty => (String::new(), String::new()),
        FileFormat::Unknown => {
            return Err(SanitizeError::UnrecognizedFormat {
                path: input.to_path_buf(),
            })
        }
    };

    Ok(DryRunReport {
        format,
        redactions: redactor.count_markers(&sanitized),
        matches: redactor.find_matches(&original),
    })
}

/// Sanitize a whole JSON document, returning it pretty-printed.
pub fn sanitize_json_str(
    redactor: &Redactor<'_>,
    content: &str,
) -> Result<(String, SanitizeReport), serde_json::Error> {
    let value: Value = serde_json::from_str(content)?;
    let sanitized = redactor.redact_value(&value);

    let compact = sanitized.to_string();
    let report = SanitizeReport {
        format: FileFormat::Json,
        lines_processed: 1,
        malformed_lines: 0,
        input_bytes: value.to_string().len(),
        output_bytes: compact.len(),
        redactions: redactor.count_markers(&compact),
    };

    Ok((serde_json::to_string_pretty(&sanitized)?, report))
}

/// Sanitize JSON Lines text, one record per line.
///
/// Blank lines stay blank. Lines that are not JSON are redacted as text and
/// kept, with a warning.
pub fn sanitize_jsonl_str(redactor: &Redactor<'_>, content: &str) -> (String, SanitizeReport) {
    let mut output = String::with_capacity(content.len());
    let mut report = SanitizeReport::empty(FileFormat::Jsonl);

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            output.push('\n');
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(value) => {
                let sanitized = redactor.redact_value(&value).to_string();
                report.input_bytes += value.to_string().len();
                report.output_bytes += sanitized.len();
                report.redactions += redactor.count_markers(&sanitized);
                report.lines_processed += 1;
                output.push_str(&sanitized);
            }
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "line is not valid JSON, redacting as text");
                report.malformed_lines += 1;
                output.push_str(&redactor.redact_text(line));
            }
        }
        output.push('\n');
    }

    (output, report)
}

fn read_input(input: &Path) -> Result<String, SanitizeError> {
    if !input.exists() {
        return Err(SanitizeError::NotFound {
            path: input.to_path_buf(),
        });
    }
    fs::read_to_string(input).map_err(|source| SanitizeError::Read {
        path: input.to_path_buf(),
        source,
    })
}

fn write_output(output: &Path, content: &str) -> Result<(), SanitizeError> {
    fs::write(output, content).map_err(|source| SanitizeError::Write {
        path: output.to_path_buf(),
        source,
    })
}

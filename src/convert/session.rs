//! Session JSONL parsing.
//!
//! Each line of a session file is one JSON record. Only `user` and
//! `assistant` records with renderable text survive; everything else
//! (summaries, meta records, command echoes, malformed lines) is dropped.
//! Records whose `message.role` is missing or unrecognized survive with
//! [`Role::Unknown`] and are left out by the renderer.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;

use super::content::{extract, ExtractOptions, MessageContent};
use super::error::ConvertError;

/// Markers of local command output and caveat notices, never rendered.
const NOISE_MARKERS: &[&str] = &["<local-command-stdout>", "Caveat:"];

/// Markers of slash-command invocations typed by the user.
const USER_COMMAND_MARKERS: &[&str] = &["<command-name>", "<command-message>", "<command-args>"];

/// Options for [`parse_session`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Content filters
    pub extract: ExtractOptions,
    /// Drop user messages that are slash-command invocations
    pub omit_user_commands: bool,
}

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    /// Missing or unrecognized `message.role`; kept but never rendered
    Unknown,
}

impl Role {
    /// Parse the `message.role` field.
    pub fn parse(role: &str) -> Self {
        match role {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Unknown,
        }
    }

    /// Heading text used in the Markdown output, `None` for unknown roles.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Role::User => Some("User"),
            Role::Assistant => Some("Assistant"),
            Role::Unknown => None,
        }
    }
}

/// One parsed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub role: Role,
    /// Extracted display text
    pub content: String,
    /// ISO-8601 timestamp, empty when the record has none
    pub timestamp: String,
    /// Record uuid, empty when absent
    pub id: String,
}

/// Parse a session file into the messages worth rendering, in file order.
///
/// Malformed lines, including lines that are not UTF-8, are skipped; only
/// I/O failures are errors.
pub fn parse_session(path: &Path, opts: &SessionOptions) -> Result<Vec<MessageRecord>, ConvertError> {
    let read_error = |source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    let reader = BufReader::new(file);

    let mut messages = Vec::new();
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(read_error)?;
        let Ok(line) = std::str::from_utf8(&line) else {
            tracing::debug!(line = index + 1, "skipping session line that is not UTF-8");
            continue;
        };
        if let Some(record) = parse_line(line, index + 1, opts) {
            messages.push(record);
        }
    }
    Ok(messages)
}

/// Same as [`parse_session`] over in-memory JSONL text.
pub fn parse_session_str(input: &str, opts: &SessionOptions) -> Vec<MessageRecord> {
    input
        .lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(line, index + 1, opts))
        .collect()
}

fn parse_line(line: &str, line_number: usize, opts: &SessionOptions) -> Option<MessageRecord> {
    let record: Value = match serde_json::from_str(line.trim()) {
        Ok(record) => record,
        Err(e) => {
            tracing::debug!(line = line_number, error = %e, "skipping unparseable session line");
            return None;
        }
    };
    // Optional fields are read loosely: a field of an unexpected type
    // defaults instead of dropping the record.
    let Value::Object(record) = record else {
        tracing::debug!(line = line_number, "skipping session line that is not an object");
        return None;
    };

    if !matches!(
        record.get("type").and_then(Value::as_str),
        Some("user" | "assistant")
    ) {
        return None;
    }
    if record.get("isMeta").is_some_and(is_truthy) {
        return None;
    }

    let message = record.get("message");
    let role = message
        .and_then(|m| m.get("role"))
        .and_then(Value::as_str)
        .map_or(Role::Unknown, Role::parse);
    let content = message
        .and_then(|m| m.get("content"))
        .cloned()
        .unwrap_or_default();
    let text = extract(&MessageContent::from_value(content), &opts.extract);

    if text.trim().is_empty() {
        return None;
    }
    if NOISE_MARKERS.iter().any(|marker| text.contains(marker)) {
        return None;
    }
    if opts.omit_user_commands
        && role == Role::User
        && USER_COMMAND_MARKERS.iter().any(|marker| text.contains(marker))
    {
        return None;
    }

    Some(MessageRecord {
        role,
        content: text,
        timestamp: field_text(record.get("timestamp")),
        id: field_text(record.get("uuid")),
    })
}

/// JSON truthiness: `null`, `false`, zero and empty strings or containers
/// are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// A scalar field as text; strings as-is, absent or `null` as empty, other
/// values in their JSON form.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

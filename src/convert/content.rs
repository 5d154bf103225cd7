//! Message content extraction.
//!
//! A session message carries its body either as a plain string or as an
//! ordered list of typed blocks (text, thinking, tool use, tool result).
//! [`extract`] flattens either shape into the text that goes into the
//! Markdown document, honouring the [`ExtractOptions`] filters.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Separator placed between the fragments of a block list.
const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Tool name used when a tool_use block has none.
const UNKNOWN_TOOL: &str = "unknown";

static FUNCTION_CALLS_REGEX: OnceLock<Regex> = OnceLock::new();

/// Filters applied while flattening message content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Render thinking blocks as collapsible sections
    pub include_thinking: bool,
    /// Drop tool_use blocks
    pub omit_tool_use: bool,
    /// Drop tool_result blocks
    pub omit_tool_results: bool,
    /// Strip `<function_calls>` XML spans from text
    pub omit_function_calls: bool,
}

/// The `content` field of a session message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain string body
    Text(String),
    /// Ordered list of content items
    Items(Vec<ContentItem>),
    /// Anything else (numbers, objects, null)
    Other(Value),
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

/// One element of a content list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    /// A bare string inside the list
    Raw(String),
    /// A typed block
    Block(ContentBlock),
    /// Any other shape, e.g. an object without a `type`
    Other(Value),
}

/// A typed content block, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    Thinking {
        #[serde(default)]
        thinking: String,
    },
    ToolUse {
        #[serde(default = "unknown_tool")]
        name: String,
        #[serde(default = "empty_object")]
        input: Value,
    },
    ToolResult {
        #[serde(default = "empty_string")]
        content: Value,
    },
    /// Images, documents and any kind added later
    #[serde(other)]
    Unknown,
}

fn unknown_tool() -> String {
    UNKNOWN_TOOL.to_string()
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

fn empty_string() -> Value {
    Value::String(String::new())
}

impl MessageContent {
    /// Interpret a raw JSON value as message content.
    ///
    /// Never fails: shapes that match neither a string nor a list end up in
    /// [`MessageContent::Other`].
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => MessageContent::Text(text),
            Value::Array(items) => {
                MessageContent::Items(items.into_iter().map(ContentItem::from_value).collect())
            }
            other => MessageContent::Other(other),
        }
    }
}

impl ContentItem {
    /// Interpret a raw JSON value as a content list element.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => ContentItem::Raw(text),
            Value::Object(_) => match ContentBlock::deserialize(&value) {
                Ok(block) => ContentItem::Block(block),
                Err(_) => ContentItem::Other(value),
            },
            other => ContentItem::Other(other),
        }
    }
}

/// Flatten message content into display text.
///
/// Strings pass through (minus function-call spans when requested). Lists
/// produce at most one fragment per item; the non-empty fragments are joined
/// with a blank line. Other values render as their JSON text, except `null`
/// which counts as no content.
pub fn extract(content: &MessageContent, opts: &ExtractOptions) -> String {
    match content {
        MessageContent::Text(text) => clean_text(text, opts),
        MessageContent::Items(items) => items
            .iter()
            .filter_map(|item| render_item(item, opts))
            .collect::<Vec<_>>()
            .join(FRAGMENT_SEPARATOR),
        MessageContent::Other(Value::Null) => String::new(),
        MessageContent::Other(value) => value.to_string(),
    }
}

fn render_item(item: &ContentItem, opts: &ExtractOptions) -> Option<String> {
    match item {
        ContentItem::Raw(text) => non_empty(clean_text(text, opts)),
        ContentItem::Block(block) => render_block(block, opts),
        ContentItem::Other(_) => None,
    }
}

fn render_block(block: &ContentBlock, opts: &ExtractOptions) -> Option<String> {
    match block {
        ContentBlock::Text { text } => non_empty(clean_text(text, opts)),
        ContentBlock::Thinking { thinking } => {
            if !opts.include_thinking || thinking.is_empty() {
                return None;
            }
            Some(format!(
                "<details><summary>💭 Thinking</summary>\n\n{}\n\n</details>",
                thinking
            ))
        }
        ContentBlock::ToolUse { name, input } => {
            if opts.omit_tool_use {
                return None;
            }
            Some(format!(
                "**Tool Use: {}**\n```json\n{}\n```",
                name,
                pretty_json(input)
            ))
        }
        ContentBlock::ToolResult { content } => {
            if opts.omit_tool_results {
                return None;
            }
            match content {
                Value::String(text) => Some(format!("**Tool Result:**\n```\n{}\n```", text)),
                other => Some(format!(
                    "**Tool Result:**\n```json\n{}\n```",
                    pretty_json(other)
                )),
            }
        }
        ContentBlock::Unknown => None,
    }
}

/// Apply the function-call filter to a piece of text.
fn clean_text(text: &str, opts: &ExtractOptions) -> String {
    if !opts.omit_function_calls {
        return text.to_string();
    }
    let re = FUNCTION_CALLS_REGEX.get_or_init(|| {
        Regex::new(r"(?s)<function_calls>.*?</function_calls>")
            .expect("Invalid function_calls Regex")
    });
    re.replace_all(text, "").trim().to_string()
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Two-space indented JSON, as used in the fenced blocks.
fn pretty_json(value: &Value) -> String {
    // Serializing a Value cannot fail: map keys are always strings.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

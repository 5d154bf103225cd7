//! Recursive redaction over JSON values.

use regex::NoExpand;
use serde_json::{Map, Value};

use super::rules::{builtin_rules, RedactionRule};

/// Applies an ordered rule list to text and JSON trees.
#[derive(Debug, Clone, Copy)]
pub struct Redactor<'a> {
    rules: &'a [RedactionRule],
}

/// Matches of one rule found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatches {
    pub category: &'static str,
    pub pattern: String,
    pub matches: Vec<String>,
}

impl Redactor<'static> {
    /// Redactor using the built-in rules.
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }
}

impl Default for Redactor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Redactor<'a> {
    /// Redactor using a custom rule list (mostly for tests).
    pub fn with_rules(rules: &'a [RedactionRule]) -> Self {
        Self { rules }
    }

    /// Apply every rule in order, each over the full result of the previous.
    ///
    /// A later rule may match text inserted by an earlier rule's replacement.
    pub fn redact_text(&self, text: &str) -> String {
        let mut result = text.to_string();
        for rule in self.rules {
            if rule.pattern().is_match(&result) {
                result = rule
                    .pattern()
                    .replace_all(&result, NoExpand(rule.replacement()))
                    .into_owned();
            }
        }
        result
    }

    /// Sanitized copy of `value`: string leaves are redacted, keys and
    /// structure are kept as they are.
    pub fn redact_value(&self, value: &Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.redact_text(text)),
            Value::Array(items) => Value::Array(items.iter().map(|v| self.redact_value(v)).collect()),
            Value::Object(map) => {
                let mut redacted = Map::with_capacity(map.len());
                for (key, val) in map {
                    redacted.insert(key.clone(), self.redact_value(val));
                }
                Value::Object(redacted)
            }
            other => other.clone(),
        }
    }

    /// Count replacement markers in already-sanitized text.
    ///
    /// This is a heuristic: markers present in the input are counted too,
    /// and markers whose text gets JSON-escaped on serialization (the ones
    /// containing quotes) are missed when counting over serialized output.
    pub fn count_markers(&self, sanitized: &str) -> usize {
        self.rules
            .iter()
            .map(|rule| sanitized.matches(rule.replacement()).count())
            .sum()
    }

    /// Every rule's matches in `text`, skipping rules with none.
    pub fn find_matches(&self, text: &str) -> Vec<RuleMatches> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let matches: Vec<String> = rule
                    .pattern()
                    .find_iter(text)
                    .map(|m| m.as_str().to_string())
                    .collect();
                if matches.is_empty() {
                    None
                } else {
                    Some(RuleMatches {
                        category: rule.category(),
                        pattern: rule.pattern().as_str().to_string(),
                        matches,
                    })
                }
            })
            .collect()
    }
}

/// Shorten a matched snippet to `width` characters, appending `...` when cut.
pub fn preview(snippet: &str, width: usize) -> String {
    if snippet.chars().count() > width {
        let cut: String = snippet.chars().take(width).collect();
        format!("{}...", cut)
    } else {
        snippet.to_string()
    }
}

//! Markdown rendering of parsed sessions.

use chrono::{DateTime, NaiveDateTime};

use super::session::MessageRecord;

/// Display format for the session date line.
const SESSION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render messages as a Markdown document titled `title`.
///
/// Layout: a level-1 title, an optional session date taken from the first
/// message, a rule, then one `## User` / `## Assistant` section per message,
/// each followed by a rule. Messages with an unknown role get no section.
pub fn render(messages: &[MessageRecord], title: &str) -> String {
    let mut sections = vec![format!("# {}\n", title)];

    if let Some(first) = messages.first() {
        if !first.timestamp.is_empty() {
            match format_session_date(&first.timestamp) {
                Some(date) => sections.push(format!("*Session Date: {}*\n", date)),
                None => tracing::debug!(timestamp = %first.timestamp, "unparseable session timestamp"),
            }
        }
    }

    sections.push("---\n".to_string());

    for message in messages {
        let Some(heading) = message.role.heading() else {
            continue;
        };
        sections.push(format!("## {}\n\n{}\n", heading, message.content));
        sections.push("\n---\n".to_string());
    }

    sections.join("\n")
}

/// Format an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS` in its own offset.
///
/// Accepts RFC 3339 (`Z` or numeric offset) and offset-less timestamps.
pub fn format_session_date(timestamp: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.format(SESSION_DATE_FORMAT).to_string());
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|dt| dt.format(SESSION_DATE_FORMAT).to_string())
}

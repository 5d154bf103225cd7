//! Session JSONL to Markdown conversion.
//!
//! The pipeline has three stages, each in its own module:
//!
//! - [`content`] - flattens one message's content (plain string or typed
//!   blocks) into display text
//! - [`session`] - reads a JSONL session file and keeps the user/assistant
//!   messages worth rendering
//! - [`markdown`] - turns the surviving messages into a Markdown document
//!
//! [`batch`] drives the pipeline over a whole projects directory.

pub mod batch;
pub mod content;
mod error;
pub mod markdown;
pub mod session;

pub use batch::{convert_single, output_file_name, session_title, ConvertBatch, SessionOutcome};
pub use content::{extract, ContentBlock, ContentItem, ExtractOptions, MessageContent};
pub use error::ConvertError;
pub use markdown::render;
pub use session::{parse_session, parse_session_str, MessageRecord, Role, SessionOptions};

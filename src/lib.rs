//! sesh - tools for agent session logs.
//!
//! Two independent pipelines share this crate:
//!
//! - [`convert`] renders chat-session JSONL files into Markdown documents.
//! - [`sanitize`] redacts keys, credentials and account identifiers from
//!   JSON or JSONL exports.
//!
//! The binary wires both up behind `sesh convert` and `sesh sanitize`; the
//! CLI definitions live in [`cli`] so the xtask crate can render man pages.

pub mod cli;
pub mod config;
pub mod convert;
pub mod logging;
pub mod sanitize;

pub use config::Config;

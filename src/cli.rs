//! Command-line interface definitions.
//!
//! Kept in the library so the xtask crate can generate man pages from the
//! same definitions the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::ConvertConfig;
use crate::convert::{ExtractOptions, SessionOptions};

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " (",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(name = "sesh")]
#[command(version = VERSION)]
#[command(about = "Convert agent session logs to Markdown and redact secrets from JSON exports")]
#[command(
    long_about = "sesh works on line-delimited JSON session logs.\n\n\
    `sesh convert` renders chat-session JSONL files into readable Markdown.\n\
    `sesh sanitize` redacts keys, credentials and account identifiers from JSON or JSONL files."
)]
pub struct Cli {
    /// Show debug diagnostics on stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert session JSONL files to Markdown
    #[command(long_about = "Convert session JSONL files to Markdown.\n\n\
        Without --single-file, every *.jsonl file below the projects directory is \
        converted to <parent-dir>_<stem>.md in the output directory. Files named \
        agent-* are skipped.")]
    Convert(ConvertArgs),

    /// Redact sensitive strings from a JSON or JSONL file
    #[command(long_about = "Redact sensitive strings from a JSON or JSONL file.\n\n\
        The format is detected from the first lines of the file. Output goes to \
        OUTPUT if given, otherwise the input file is rewritten in place.\n\n\
        Review the result: the rules err on the side of over-redaction.")]
    Sanitize(SanitizeArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Directory containing JSONL session files [default: ./projects]
    #[arg(short = 'p', long, value_name = "DIR")]
    pub projects_dir: Option<PathBuf>,

    /// Output directory for Markdown files [default: ./markdown_sessions]
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Convert a single JSONL file instead of scanning a directory
    #[arg(short = 'f', long, value_name = "FILE", conflicts_with = "projects_dir")]
    pub single_file: Option<PathBuf>,

    /// Include thinking blocks in the output
    #[arg(long)]
    pub include_thinking: bool,

    /// Omit tool use blocks from the output
    #[arg(long)]
    pub omit_tool_use: bool,

    /// Omit tool result blocks from the output
    #[arg(long)]
    pub omit_tool_results: bool,

    /// Omit <function_calls> XML blocks from the output
    #[arg(long)]
    pub omit_function_calls: bool,

    /// Omit user slash-command invocations from the output
    #[arg(long)]
    pub omit_user_commands: bool,
}

impl ConvertArgs {
    /// Combine flags with configured defaults; a filter is on if either enables it.
    pub fn session_options(&self, config: &ConvertConfig) -> SessionOptions {
        let base = config.session_options();
        SessionOptions {
            extract: ExtractOptions {
                include_thinking: self.include_thinking || base.extract.include_thinking,
                omit_tool_use: self.omit_tool_use || base.extract.omit_tool_use,
                omit_tool_results: self.omit_tool_results || base.extract.omit_tool_results,
                omit_function_calls: self.omit_function_calls || base.extract.omit_function_calls,
            },
            omit_user_commands: self.omit_user_commands || base.omit_user_commands,
        }
    }

    /// Projects directory from flags, else config.
    pub fn projects_dir(&self, config: &ConvertConfig) -> PathBuf {
        self.projects_dir
            .clone()
            .unwrap_or_else(|| config.projects_dir.clone())
    }

    /// Output directory from flags, else config.
    pub fn output_dir(&self, config: &ConvertConfig) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| config.output_dir.clone())
    }
}

#[derive(Debug, Args)]
pub struct SanitizeArgs {
    /// Input JSON or JSONL file to sanitize
    pub input: PathBuf,

    /// Output file (default: rewrite the input in place)
    pub output: Option<PathBuf>,

    /// Edit the file in place (same as omitting OUTPUT)
    #[arg(long)]
    pub in_place: bool,

    /// Show what would be redacted without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, list matching rules and preview matched text
    #[arg(long)]
    pub verbose: bool,
}

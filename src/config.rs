//! User configuration.
//!
//! Optional TOML file at `<config dir>/sesh/config.toml` (or `$SESH_CONFIG`).
//! Every field has a default, so a missing file or a partial one is fine.
//! Command-line flags are applied on top of these values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::convert::{ExtractOptions, SessionOptions};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SESH_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub convert: ConvertConfig,
    pub sanitize: SanitizeConfig,
}

/// Defaults for `sesh convert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Directory scanned for session files
    pub projects_dir: PathBuf,
    /// Where Markdown files are written
    pub output_dir: PathBuf,
    pub include_thinking: bool,
    pub omit_tool_use: bool,
    pub omit_tool_results: bool,
    pub omit_function_calls: bool,
    pub omit_user_commands: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            projects_dir: PathBuf::from("./projects"),
            output_dir: PathBuf::from("./markdown_sessions"),
            include_thinking: false,
            omit_tool_use: false,
            omit_tool_results: false,
            omit_function_calls: false,
            omit_user_commands: false,
        }
    }
}

impl ConvertConfig {
    /// Session options as configured, before command-line flags.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            extract: ExtractOptions {
                include_thinking: self.include_thinking,
                omit_tool_use: self.omit_tool_use,
                omit_tool_results: self.omit_tool_results,
                omit_function_calls: self.omit_function_calls,
            },
            omit_user_commands: self.omit_user_commands,
        }
    }
}

/// Defaults for `sesh sanitize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeConfig {
    /// Matched snippets shown per rule with `--verbose --dry-run`
    pub preview_limit: usize,
    /// Characters shown per snippet before truncating
    pub preview_width: usize,
}

impl Default for SanitizeConfig {
    fn default() -> Self {
        Self {
            preview_limit: 3,
            preview_width: 50,
        }
    }
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("sesh").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, falling back to defaults when missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

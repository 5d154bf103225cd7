//! Directory-wide conversion.
//!
//! Finds every `*.jsonl` session below a projects directory and writes one
//! Markdown file per session into the output directory. Failures are
//! reported per file and never abort the batch.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConvertError;
use super::markdown::render;
use super::session::{parse_session, SessionOptions};

/// Sub-agent transcripts are skipped; they duplicate the parent session.
const AGENT_FILE_PREFIX: &str = "agent-";

/// What happened to one session file.
#[derive(Debug)]
pub enum SessionOutcome {
    /// Markdown written
    Converted {
        source: PathBuf,
        output: PathBuf,
        messages: usize,
    },
    /// Sub-agent transcript, not converted
    SkippedAgent { source: PathBuf },
    /// No renderable messages
    SkippedEmpty { source: PathBuf },
    /// Read or write failure
    Failed {
        source: PathBuf,
        error: ConvertError,
    },
}

impl SessionOutcome {
    /// User-facing one-line summary.
    pub fn message(&self) -> String {
        match self {
            Self::Converted {
                source,
                output,
                messages,
            } => format!(
                "Converted {} -> {} ({} messages)",
                file_name(source),
                file_name(output),
                messages
            ),
            Self::SkippedAgent { source } => format!("Skipping agent file: {}", file_name(source)),
            Self::SkippedEmpty { source } => {
                format!("Skipping {} (no messages)", file_name(source))
            }
            Self::Failed { source, error } => {
                format!("Failed to convert {}: {}", file_name(source), error)
            }
        }
    }
}

/// The session files found below a projects directory.
#[derive(Debug)]
pub struct ConvertBatch {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl ConvertBatch {
    /// Scan `root` recursively for `*.jsonl` files, sorted by path.
    ///
    /// Subdirectories that cannot be read are logged and skipped.
    pub fn discover(root: &Path) -> Result<Self, ConvertError> {
        if !root.is_dir() {
            return Err(ConvertError::MissingDirectory {
                path: root.to_path_buf(),
            });
        }

        let root_str = root.to_str().ok_or_else(|| ConvertError::NonUtf8Path {
            path: root.to_path_buf(),
        })?;
        let pattern = format!("{}/**/*.jsonl", glob::Pattern::escape(root_str));

        let mut files = glob::glob(&pattern)?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::warn!(path = %e.path().display(), error = %e.error(), "skipping unreadable path");
                    None
                }
            })
            .filter(|path| path.is_file())
            .collect::<Vec<_>>();
        files.sort();

        tracing::debug!(root = %root.display(), count = files.len(), "discovered session files");

        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    /// Discovered files, including agent transcripts that will be skipped.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Convert every discovered session into `output_dir`.
    ///
    /// `on_outcome` is called once per file as it completes. The output
    /// directory is created if missing; failing to create it is the only
    /// error that stops the batch.
    pub fn run(
        &self,
        output_dir: &Path,
        opts: &SessionOptions,
        mut on_outcome: impl FnMut(&SessionOutcome),
    ) -> Result<Vec<SessionOutcome>, ConvertError> {
        fs::create_dir_all(output_dir).map_err(|source| ConvertError::Write {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut outcomes = Vec::with_capacity(self.files.len());
        for source in &self.files {
            let outcome = self.convert_one(source, output_dir, opts);
            on_outcome(&outcome);
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    fn convert_one(&self, source: &Path, output_dir: &Path, opts: &SessionOptions) -> SessionOutcome {
        let source_buf = source.to_path_buf();

        if file_name(source).starts_with(AGENT_FILE_PREFIX) {
            return SessionOutcome::SkippedAgent { source: source_buf };
        }

        let messages = match parse_session(source, opts) {
            Ok(messages) => messages,
            Err(error) => {
                tracing::warn!(file = %source.display(), error = %error, "session conversion failed");
                return SessionOutcome::Failed {
                    source: source_buf,
                    error,
                };
            }
        };

        if messages.is_empty() {
            return SessionOutcome::SkippedEmpty { source: source_buf };
        }

        let relative = source.strip_prefix(&self.root).unwrap_or(source);
        let output = output_dir.join(output_file_name(relative));
        let markdown = render(&messages, &session_title(relative));

        match fs::write(&output, markdown) {
            Ok(()) => SessionOutcome::Converted {
                source: source_buf,
                output,
                messages: messages.len(),
            },
            Err(source_err) => {
                let error = ConvertError::Write {
                    path: output,
                    source: source_err,
                };
                tracing::warn!(file = %source.display(), error = %error, "session conversion failed");
                SessionOutcome::Failed {
                    source: source_buf,
                    error,
                }
            }
        }
    }
}

/// Convert one session file into `{stem}.md` inside `output_dir`.
///
/// Unlike batch mode the document is written even when no messages survive,
/// and any failure is returned to the caller.
pub fn convert_single(
    source: &Path,
    output_dir: &Path,
    opts: &SessionOptions,
) -> Result<SessionOutcome, ConvertError> {
    let messages = parse_session(source, opts)?;

    fs::create_dir_all(output_dir).map_err(|e| ConvertError::Write {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let stem = file_stem(source);
    let output = output_dir.join(format!("{}.md", stem));
    fs::write(&output, render(&messages, &stem)).map_err(|e| ConvertError::Write {
        path: output.clone(),
        source: e,
    })?;

    Ok(SessionOutcome::Converted {
        source: source.to_path_buf(),
        output,
        messages: messages.len(),
    })
}

/// Output file name for a session at `relative` (relative to the projects
/// directory): `{parent directory name}_{stem}.md`.
pub fn output_file_name(relative: &Path) -> String {
    let parent = relative
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}_{}.md", parent, file_stem(relative))
}

/// Document title for a session at `relative`: its parent path joined with
/// the file stem.
pub fn session_title(relative: &Path) -> String {
    let stem = file_stem(relative);
    match relative.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.join(stem).to_string_lossy().into_owned()
        }
        _ => stem,
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

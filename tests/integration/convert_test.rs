//! Integration tests for session conversion

use std::fs;

use tempfile::TempDir;

use sesh::convert::{parse_session, render, ConvertBatch, SessionOptions, SessionOutcome};

use crate::helpers::{copy_projects, fixtures_dir, run_sesh};

// ============================================================================
// Library
// ============================================================================

#[test]
fn session_fixture_parses_to_four_messages() {
    let path = fixtures_dir().join("projects/-home-dev-app/session-1.jsonl");
    let messages = parse_session(&path, &SessionOptions::default()).unwrap();

    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].content, "Fix the login bug");
    assert_eq!(messages[0].id, "u1");
    assert!(messages[2].content.starts_with("**Tool Result:**"));
}

#[test]
fn session_fixture_renders_markdown() {
    let path = fixtures_dir().join("projects/-home-dev-app/session-1.jsonl");
    let messages = parse_session(&path, &SessionOptions::default()).unwrap();
    let markdown = render(&messages, "-home-dev-app/session-1");

    insta::assert_snapshot!(markdown, @r###"
# -home-dev-app/session-1

*Session Date: 2025-01-15 10:30:00*

---

## User

Fix the login bug


---

## Assistant

Looking now.

**Tool Use: Bash**
```json
{
  "command": "ls"
}
```


---

## User

**Tool Result:**
```
src
```


---

## User

<command-name>/clear</command-name>


---
"###);
}

#[test]
fn batch_reports_each_file_in_order() {
    let projects = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    copy_projects(projects.path());

    let batch = ConvertBatch::discover(projects.path()).unwrap();
    assert_eq!(batch.len(), 3);

    let mut seen = Vec::new();
    let outcomes = batch
        .run(output.path(), &SessionOptions::default(), |o| {
            seen.push(o.message())
        })
        .unwrap();

    assert_eq!(seen.len(), 3);
    assert!(matches!(outcomes[0], SessionOutcome::SkippedAgent { .. }));
    assert!(matches!(
        outcomes[1],
        SessionOutcome::Converted { messages: 4, .. }
    ));
    assert!(matches!(outcomes[2], SessionOutcome::SkippedEmpty { .. }));
    assert!(output.path().join("-home-dev-app_session-1.md").exists());
    assert!(!output.path().join("-home-dev-app_summary-only.md").exists());
}

// ============================================================================
// CLI
// ============================================================================

#[test]
fn convert_directory_writes_markdown_and_reports() {
    let work = TempDir::new().unwrap();
    copy_projects(&work.path().join("projects"));

    let (stdout, stderr, exit_code) = run_sesh(work.path(), &["convert"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Found 3 JSONL files"));
    assert!(stdout.contains("Skipping agent file: agent-7f3a.jsonl"));
    assert!(stdout.contains("Skipping summary-only.jsonl (no messages)"));
    assert!(stdout.contains("(4 messages)"));

    let markdown =
        fs::read_to_string(work.path().join("markdown_sessions/-home-dev-app_session-1.md"))
            .unwrap();
    assert!(markdown.starts_with("# -home-dev-app/session-1\n"));
}

#[test]
fn convert_filters_apply() {
    let work = TempDir::new().unwrap();
    copy_projects(&work.path().join("projects"));

    let (_stdout, stderr, exit_code) = run_sesh(
        work.path(),
        &[
            "convert",
            "-o",
            "out",
            "--include-thinking",
            "--omit-tool-use",
            "--omit-tool-results",
            "--omit-user-commands",
        ],
    );
    assert_eq!(exit_code, 0, "stderr: {}", stderr);

    let markdown = fs::read_to_string(work.path().join("out/-home-dev-app_session-1.md")).unwrap();
    assert!(markdown.contains("💭 Thinking"));
    assert!(markdown.contains("The session check looks wrong."));
    assert!(!markdown.contains("Tool Use"));
    assert!(!markdown.contains("Tool Result"));
    assert!(!markdown.contains("<command-name>"));
}

#[test]
fn convert_single_file_uses_stem_name() {
    let work = TempDir::new().unwrap();
    let source = fixtures_dir().join("projects/-home-dev-app/session-1.jsonl");

    let (stdout, stderr, exit_code) = run_sesh(
        work.path(),
        &["convert", "-f", source.to_str().unwrap(), "-o", "single"],
    );

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Converted"));
    let markdown = fs::read_to_string(work.path().join("single/session-1.md")).unwrap();
    assert!(markdown.starts_with("# session-1\n"));
}

#[test]
fn convert_empty_projects_dir_reports_nothing_to_do() {
    let work = TempDir::new().unwrap();
    fs::create_dir(work.path().join("projects")).unwrap();

    let (stdout, stderr, exit_code) = run_sesh(work.path(), &["convert"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Found 0 JSONL files"));
    assert!(stdout.contains("Nothing to convert"));
    assert!(!work.path().join("markdown_sessions").exists());
}

#[test]
fn convert_missing_projects_dir_fails() {
    let work = TempDir::new().unwrap();

    let (_stdout, stderr, exit_code) = run_sesh(work.path(), &["convert", "-p", "nowhere"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("nowhere"));
}

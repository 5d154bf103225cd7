//! Integration tests for top-level CLI behaviour

use tempfile::TempDir;

use crate::helpers::run_sesh;

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_sesh(dir.path(), &["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("convert"));
    assert!(stdout.contains("sanitize"));
    assert!(stdout.contains("completions"));
}

#[test]
fn version_includes_package_version() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_sesh(dir.path(), &["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn sanitize_without_input_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_sesh(dir.path(), &["sanitize"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<INPUT>"));
}

#[test]
fn single_file_with_projects_dir_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) =
        run_sesh(dir.path(), &["convert", "-p", "a", "-f", "b.jsonl"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("cannot be used with"));
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_sesh(dir.path(), &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("not found, showing defaults"));
    assert!(stdout.contains("[convert]"));
    assert!(stdout.contains("output_dir = \"./markdown_sessions\""));
    assert!(stdout.contains("preview_limit = 3"));
}

#[test]
fn config_file_changes_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("sesh-config.toml"),
        "[convert]\noutput_dir = \"md\"\n",
    )
    .unwrap();

    let (stdout, _stderr, exit_code) = run_sesh(dir.path(), &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(!stdout.contains("showing defaults"));
    assert!(stdout.contains("output_dir = \"md\""));
}

#[test]
fn completions_generate_for_bash() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_sesh(dir.path(), &["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("sesh"));
}

//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Directory holding the checked-in test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Read a fixture file as text.
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Copy a fixture into a fresh temp dir so tests can modify it.
///
/// The returned `TempDir` must be kept alive for as long as the path is used.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &target).unwrap();
    (dir, target)
}

/// Copy the fixture projects tree into `dest`.
pub fn copy_projects(dest: &Path) {
    copy_dir(&fixtures_dir().join("projects"), dest);
}

fn copy_dir(src: &Path, dest: &Path) {
    fs::create_dir_all(dest).unwrap();
    for entry in fs::read_dir(src).unwrap() {
        let entry = entry.unwrap();
        let target = dest.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Run the sesh binary in `cwd`, capturing output.
///
/// The config file is pointed at `cwd/sesh-config.toml`, which does not
/// exist unless a test writes it.
pub fn run_sesh(cwd: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_sesh"))
        .args(args)
        .current_dir(cwd)
        .env("SESH_CONFIG", cwd.join("sesh-config.toml"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute sesh");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

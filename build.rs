//! Version metadata for `sesh --version`.
//!
//! Always emits `VERGEN_BUILD_DATE`. Builds without the `release` feature
//! also emit `VERGEN_GIT_SHA`. Both fall back to `unknown` when vergen
//! cannot produce them, so the `env!` lookups in `cli.rs` always resolve.

use std::error::Error;

use vergen_gitcl::{BuildBuilder, Emitter};

type BuildResult = Result<(), Box<dyn Error + Send + Sync>>;

fn main() {
    if let Err(e) = emit_build_date() {
        println!("cargo:warning=Failed to get build date: {}", e);
        println!("cargo:rustc-env=VERGEN_BUILD_DATE=unknown");
    }

    #[cfg(not(feature = "release"))]
    if let Err(e) = emit_git_sha() {
        // Not in a git repo (e.g. building from a source tarball)
        println!("cargo:warning=Failed to get git info: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}

fn emit_build_date() -> BuildResult {
    let build = BuildBuilder::default().build_date(true).build()?;
    Emitter::default().add_instructions(&build)?.emit()?;
    Ok(())
}

#[cfg(not(feature = "release"))]
fn emit_git_sha() -> BuildResult {
    use vergen_gitcl::GitclBuilder;

    let git = GitclBuilder::default().sha(true).build()?;
    Emitter::default().add_instructions(&git)?.emit()?;
    Ok(())
}

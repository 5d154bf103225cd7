//! Build tasks for sesh.
//!
//! Run with `cargo xtask <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

#[derive(Parser)]
#[command(name = "xtask", about = "Build tasks for sesh")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for sesh and its subcommands
    Man {
        /// Output directory
        #[arg(short, long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let command = sesh::cli::Cli::command();
    let name = command.get_name().to_string();
    write_page(out_dir, &name, command.clone())?;

    for sub in command.get_subcommands() {
        let page = format!("{}-{}", name, sub.get_name());
        write_page(out_dir, &page, sub.clone())?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn write_page(out_dir: &Path, name: &str, command: clap::Command) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(command).render(&mut buffer)?;
    let path = out_dir.join(format!("{name}.1"));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

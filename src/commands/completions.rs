//! Shell completions handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use sesh::cli::Cli;

/// Print completions for `shell` to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

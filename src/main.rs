use anyhow::Result;
use clap::Parser;

use sesh::cli::{Cli, Commands, ConfigCommands};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    sesh::logging::init(cli.debug);

    match cli.command {
        Commands::Convert(args) => commands::convert::handle(&args),
        Commands::Sanitize(args) => commands::sanitize::handle(&args),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}

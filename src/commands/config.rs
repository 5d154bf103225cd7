//! Config subcommands handler

use anyhow::Result;

use sesh::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config_path = Config::config_path()?;
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;

    if config_path.exists() {
        println!("# {}", config_path.display());
    } else {
        println!("# {} (not found, showing defaults)", config_path.display());
    }
    println!("{}", toml_str);
    Ok(())
}

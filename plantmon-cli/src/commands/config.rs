//! Configuration inspection commands.

use std::io;
use std::path::Path;

use clap::Subcommand;

use super::common::{load_config, resolve_config_path};
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the configuration file path
    Path,

    /// Print the effective configuration, including defaults
    Show,
}

/// Run a config subcommand.
pub fn run(config_path: Option<&Path>, command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Path => {
            println!("{}", resolve_config_path(config_path).display());
            Ok(())
        }
        ConfigCommands::Show => {
            let config = load_config(config_path)?;
            config.to_ini().write_to(&mut io::stdout())?;
            Ok(())
        }
    }
}

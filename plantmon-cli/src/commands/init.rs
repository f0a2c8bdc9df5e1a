//! Init command - create the configuration file.

use std::path::Path;

use plantmon::config::ConfigFile;

use super::common::resolve_config_path;
use crate::error::CliError;

/// Run the init command. An existing file is left untouched.
pub fn run(config_path: Option<&Path>) -> Result<(), CliError> {
    let path = resolve_config_path(config_path);

    if write_default_config(&path)? {
        println!("Created configuration file: {}", path.display());
        println!();
        println!("Edit this file to customize Plant Monitor settings.");
        println!("CLI arguments override config file values when specified.");
    } else {
        println!("Configuration file already exists: {}", path.display());
    }
    Ok(())
}

/// Returns `false` if the file already existed.
fn write_default_config(path: &Path) -> Result<bool, CliError> {
    if path.exists() {
        return Ok(false);
    }
    ConfigFile::default().save_to(path)?;
    Ok(true)
}

//! Helpers shared across CLI commands.

use std::path::{Path, PathBuf};

use plantmon::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Load the configuration named by `--config`, or the default file.
///
/// An explicit path must exist. The default file is optional and missing
/// values fall back to built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    let config = match path {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    Ok(config)
}

/// Path of the configuration file in use.
pub fn resolve_config_path(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf).unwrap_or_else(config_file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[server]\nport = 8123\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.server.port, 8123);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("absent.ini")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_resolve_config_path() {
        let explicit = PathBuf::from("/etc/plantmon.ini");
        assert_eq!(resolve_config_path(Some(&explicit)), explicit);
        assert_eq!(resolve_config_path(None), config_file_path());
    }
}

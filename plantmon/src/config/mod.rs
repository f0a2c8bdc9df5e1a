//! Configuration file handling.
//!
//! Settings live in an INI file, by default `~/.plantmon/config.ini`. A
//! missing file is not an error: every setting has a default, and CLI flags
//! override whatever the file says.

mod error;
mod file;

pub use error::ConfigError;
pub use file::{
    config_directory, config_file_path, ConfigFile, LoggingSettings, ServerSettings,
    CONFIG_FILE_NAME, DEFAULT_BIND_ADDRESS, DEFAULT_PORT,
};

//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid INI.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A setting has a value of the wrong shape.
    #[error("Invalid value '{value}' for {section}.{key}: {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

//! CLI error type.

use std::fmt;

use plantmon::app::AppError;
use plantmon::config::ConfigError;

/// Errors reported to the user by the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded or saved.
    Config(ConfigError),

    /// The daemon failed to start or stopped with an error.
    App(AppError),

    /// A command-line argument was rejected.
    InvalidArgument(String),

    /// Writing output failed.
    Io(std::io::Error),

    /// Serializing output failed.
    Output(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{}", e),
            CliError::App(e) => write!(f, "{}", e),
            CliError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Output(e) => write!(f, "Failed to format output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::App(e) => Some(e),
            CliError::InvalidArgument(_) => None,
            CliError::Io(e) => Some(e),
            CliError::Output(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<AppError> for CliError {
    fn from(e: AppError) -> Self {
        CliError::App(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e)
    }
}

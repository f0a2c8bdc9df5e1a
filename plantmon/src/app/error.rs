//! Application error types.

use std::fmt;
use std::net::SocketAddr;

use crate::config::ConfigError;

/// Errors that can occur during application lifecycle.
#[derive(Debug)]
pub enum AppError {
    /// Failed to bind the HTTP listener.
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// The HTTP server stopped with an error.
    Serve(std::io::Error),

    /// Configuration error.
    Config(ConfigError),

    /// Failed to create the Tokio runtime.
    RuntimeCreation(String),

    /// Failed to install the logging subscriber.
    Logging(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Bind { addr, source } => {
                write!(f, "Failed to bind {}: {}", addr, source)
            }
            AppError::Serve(e) => write!(f, "HTTP server failed: {}", e),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::RuntimeCreation(msg) => {
                write!(f, "Failed to create Tokio runtime: {}", msg)
            }
            AppError::Logging(msg) => write!(f, "Failed to initialize logging: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Bind { source, .. } => Some(source),
            AppError::Serve(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::RuntimeCreation(_) | AppError::Logging(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Bind {
            addr: "0.0.0.0:5000".parse().unwrap(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use"),
        };
        assert!(err.to_string().contains("Failed to bind 0.0.0.0:5000"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_app_error_from_config_error() {
        let config_err = ConfigError::InvalidValue {
            section: "server".to_string(),
            key: "port".to_string(),
            value: "abc".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        let app_err: AppError = config_err.into();
        assert!(matches!(app_err, AppError::Config(_)));
        assert!(app_err.to_string().contains("server.port"));
    }
}

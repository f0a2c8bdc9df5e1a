//! Application bootstrap and lifecycle management.
//!
//! [`PlantMonitorApp`] performs the one-time startup sequence:
//!
//! 1. Initialize the sensors (hardware, or fallback if that fails)
//! 2. Create the calibration store at its default offset
//! 3. Bind the HTTP listener
//!
//! and then serves the API until the shutdown token is cancelled.
//!
//! # Example
//!
//! ```ignore
//! use plantmon::app::{AppConfig, PlantMonitorApp};
//! use tokio_util::sync::CancellationToken;
//!
//! let app = PlantMonitorApp::start(AppConfig::default()).await?;
//! println!("Listening on {}", app.local_addr());
//! app.serve(CancellationToken::new()).await?;
//! ```

mod bootstrap;
mod config;
mod error;

pub use bootstrap::{wait_for_shutdown_signal, PlantMonitorApp};
pub use config::AppConfig;
pub use error::AppError;

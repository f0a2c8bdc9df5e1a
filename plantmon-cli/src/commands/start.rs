//! Start command - run the monitoring daemon.

use std::net::IpAddr;
use std::path::Path;

use plantmon::app::{AppConfig, PlantMonitorApp};
use plantmon::logging::init_logging;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::common::{load_config, resolve_config_path};
use crate::error::CliError;

/// Command-line overrides for the config file.
#[derive(Debug, Default)]
pub struct StartArgs {
    pub bind: Option<IpAddr>,
    pub port: Option<u16>,
    pub soil_pin: Option<u32>,
}

/// Run the start command. Blocks until Ctrl+C or SIGTERM.
pub fn run(config_path: Option<&Path>, args: StartArgs) -> Result<(), CliError> {
    let config_file = load_config(config_path)?;
    let config = apply_overrides(AppConfig::from_config_file(&config_file), args);

    // Logging goes first so sensor discovery warnings are visible.
    let _logging = init_logging(config.log_directory.as_deref())?;

    info!(config = %resolve_config_path(config_path).display(), "Configuration loaded");
    println!("Plant Monitor v{}", plantmon::VERSION);
    println!("  Dashboard: http://{}/", config.socket_addr());
    println!("  Soil sensor pin: {}", config.sensors.soil_pin);
    println!();
    println!("Press Ctrl+C to stop.");

    PlantMonitorApp::run_blocking(config, CancellationToken::new())?;
    Ok(())
}

fn apply_overrides(mut config: AppConfig, args: StartArgs) -> AppConfig {
    if let Some(bind) = args.bind {
        config = config.with_bind(bind);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(pin) = args.soil_pin {
        config = config.with_soil_pin(pin);
    }
    config
}

//! Application configuration for `PlantMonitorApp`.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::config::{ConfigFile, DEFAULT_BIND_ADDRESS, DEFAULT_PORT};
use crate::sensor::SensorConfig;

/// Everything needed to start the daemon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind: IpAddr,

    /// HTTP port. `0` picks a free port.
    pub port: u16,

    /// Sensor hardware locations.
    pub sensors: SensorConfig,

    /// Directory for log files, if any.
    pub log_directory: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDRESS,
            port: DEFAULT_PORT,
            sensors: SensorConfig::default(),
            log_directory: None,
        }
    }
}

impl AppConfig {
    /// Create application config from the configuration file.
    pub fn from_config_file(config: &ConfigFile) -> Self {
        Self {
            bind: config.server.bind,
            port: config.server.port,
            sensors: config.sensors.clone(),
            log_directory: config.logging.directory.clone(),
        }
    }

    /// Set the bind address.
    pub fn with_bind(mut self, bind: IpAddr) -> Self {
        self.bind = bind;
        self
    }

    /// Set the HTTP port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the soil moisture sensor pin.
    pub fn with_soil_pin(mut self, pin: u32) -> Self {
        self.sensors.soil_pin = pin;
        self
    }

    /// Replace the sensor configuration.
    pub fn with_sensors(mut self, sensors: SensorConfig) -> Self {
        self.sensors = sensors;
        self
    }

    /// Socket address to listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

//! The `config.ini` file.

use std::fs;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::Ini;

use super::error::ConfigError;
use crate::sensor::SensorConfig;

/// File name inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Listen on all interfaces so the dashboard is reachable from the LAN.
pub const DEFAULT_BIND_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;

const SERVER: &str = "server";
const SENSORS: &str = "sensors";
const LOGGING: &str = "logging";

/// Directory holding the configuration file (`~/.plantmon`).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".plantmon")
}

/// Full path of the default configuration file.
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind: IpAddr,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDRESS,
            port: DEFAULT_PORT,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Directory for rolling log files; stdout only when unset.
    pub directory: Option<PathBuf>,
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub server: ServerSettings,
    pub sensors: SensorConfig,
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Load from the default location, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_file_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|e| match e {
            ini::Error::Io(source) => ConfigError::Io {
                path: path.to_path_buf(),
                source,
            },
            ini::Error::Parse(err) => ConfigError::Parse {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
        })?;
        Self::from_ini(&ini)
    }

    /// Build from an already parsed INI document. Missing keys keep their
    /// defaults.
    pub fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(bind) = parse_value::<IpAddr>(ini, SERVER, "bind")? {
            config.server.bind = bind;
        }
        if let Some(port) = parse_value::<u16>(ini, SERVER, "port")? {
            config.server.port = port;
        }

        if let Some(pin) = parse_value::<u32>(ini, SENSORS, "soil_pin")? {
            config.sensors.soil_pin = pin;
        }
        if let Some(dir) = get_value(ini, SENSORS, "w1_devices_dir") {
            config.sensors.w1_devices_dir = PathBuf::from(dir);
        }
        if let Some(dir) = get_value(ini, SENSORS, "gpio_dir") {
            config.sensors.gpio_dir = PathBuf::from(dir);
        }
        config.sensors.thermometer_id = get_value(ini, SENSORS, "thermometer_id").map(String::from);

        config.logging.directory = get_value(ini, LOGGING, "directory").map(PathBuf::from);

        Ok(config)
    }

    /// Render as an INI document.
    pub fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some(SERVER))
            .set("bind", self.server.bind.to_string())
            .set("port", self.server.port.to_string());

        ini.with_section(Some(SENSORS))
            .set("soil_pin", self.sensors.soil_pin.to_string())
            .set(
                "w1_devices_dir",
                self.sensors.w1_devices_dir.to_string_lossy().to_string(),
            )
            .set(
                "gpio_dir",
                self.sensors.gpio_dir.to_string_lossy().to_string(),
            );
        if let Some(id) = &self.sensors.thermometer_id {
            ini.with_section(Some(SENSORS)).set("thermometer_id", id.as_str());
        }

        if let Some(dir) = &self.logging.directory {
            ini.with_section(Some(LOGGING))
                .set("directory", dir.to_string_lossy().to_string());
        }

        ini
    }

    /// Save to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to an explicit path, creating parent directories if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        self.to_ini().write_to_file(path).map_err(io_error)
    }
}

/// Non-empty value of `section.key`.
fn get_value<'a>(ini: &'a Ini, section: &str, key: &str) -> Option<&'a str> {
    ini.section(Some(section))
        .and_then(|s| s.get(key))
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn parse_value<T>(ini: &Ini, section: &str, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_value(ini, section, key)
        .map(|raw| {
            raw.parse::<T>().map_err(|e| ConfigError::InvalidValue {
                section: section.to_string(),
                key: key.to_string(),
                value: raw.to_string(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigFile::default();
        assert_eq!(config.server.bind.to_string(), "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.sensors.soil_pin, 17);
        assert_eq!(
            config.sensors.w1_devices_dir,
            PathBuf::from("/sys/bus/w1/devices")
        );
        assert_eq!(config.sensors.gpio_dir, PathBuf::from("/sys/class/gpio"));
        assert_eq!(config.sensors.thermometer_id, None);
        assert_eq!(config.logging.directory, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let ini = Ini::load_from_str("[server]\nport = 8080\n").unwrap();
        let config = ConfigFile::from_ini(&ini).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.sensors.soil_pin, 17);
    }

    #[test]
    fn test_full_file() {
        let ini = Ini::load_from_str(
            "[server]\n\
             bind = 127.0.0.1\n\
             port = 5050\n\
             [sensors]\n\
             soil_pin = 27\n\
             w1_devices_dir = /tmp/w1\n\
             gpio_dir = /tmp/gpio\n\
             thermometer_id = 28-0316a2795aff\n\
             [logging]\n\
             directory = /var/log/plantmon\n",
        )
        .unwrap();

        let config = ConfigFile::from_ini(&ini).unwrap();
        assert_eq!(config.server.bind.to_string(), "127.0.0.1");
        assert_eq!(config.server.port, 5050);
        assert_eq!(config.sensors.soil_pin, 27);
        assert_eq!(config.sensors.w1_devices_dir, PathBuf::from("/tmp/w1"));
        assert_eq!(config.sensors.gpio_dir, PathBuf::from("/tmp/gpio"));
        assert_eq!(
            config.sensors.thermometer_id.as_deref(),
            Some("28-0316a2795aff")
        );
        assert_eq!(
            config.logging.directory,
            Some(PathBuf::from("/var/log/plantmon"))
        );
    }

    #[test]
    fn test_invalid_port() {
        let ini = Ini::load_from_str("[server]\nport = 99999\n").unwrap();
        let err = ConfigFile::from_ini(&ini).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "port"));
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_invalid_bind_address() {
        let ini = Ini::load_from_str("[server]\nbind = raspberrypi.local\n").unwrap();
        assert!(ConfigFile::from_ini(&ini).is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = ConfigFile::default();
        config.server.port = 6000;
        config.sensors = config.sensors.with_soil_pin(22).with_thermometer_id("28-abc");
        config.logging.directory = Some(PathBuf::from("/tmp/plantmon-logs"));

        config.save_to(&path).unwrap();
        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigFile::load_from(&dir.path().join("missing.ini")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_config_file_path() {
        let path = config_file_path();
        assert!(path.ends_with(".plantmon/config.ini"));
    }
}

//! 1-Wire thermometer driver (DS18B20 and relatives) via the kernel's w1 sysfs.
//!
//! The `w1-therm` kernel module exposes each probe as a directory under
//! `/sys/bus/w1/devices`. Reading `w1_slave` triggers a conversion and returns
//! two lines:
//!
//! ```text
//! 72 01 4b 46 7f ff 0e 10 57 : crc=57 YES
//! 72 01 4b 46 7f ff 0e 10 57 t=23125
//! ```
//!
//! The first line reports the CRC check, the second the temperature in
//! millidegrees Celsius.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use super::error::{SensorError, SensorKind};

/// 1-Wire family codes of supported thermometers.
///
/// DS18S20 (10), DS1822 (22), DS18B20 (28), DS1825 (3b), DS28EA00 (42).
pub const THERMOMETER_FAMILIES: &[&str] = &["10", "22", "28", "3b", "42"];

/// Default sysfs location of 1-Wire devices.
pub const DEFAULT_W1_DEVICES_DIR: &str = "/sys/bus/w1/devices";

/// Power-on value of the scratchpad, reported when no conversion happened.
const RESET_VALUE_MILLIDEGREES: i64 = 85_000;

fn temperature_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"t=(-?\d+)").expect("valid temperature regex"))
}

/// A single 1-Wire thermometer.
#[derive(Debug, Clone)]
pub struct W1Thermometer {
    id: String,
    slave_file: PathBuf,
}

impl W1Thermometer {
    /// Find the first supported thermometer under `devices_dir`.
    ///
    /// Candidates are ordered by device id so discovery is deterministic
    /// when more than one probe is attached.
    pub fn discover(devices_dir: &Path) -> Result<Self, SensorError> {
        let escaped = glob::Pattern::escape(&devices_dir.to_string_lossy());
        let mut candidates = Vec::new();

        for family in THERMOMETER_FAMILIES {
            let pattern = format!("{}/{}-*", escaped, family);
            let paths = glob::glob(&pattern).map_err(|e| {
                SensorError::init(SensorKind::Temperature, format!("bad search pattern: {}", e))
            })?;
            candidates.extend(paths.filter_map(Result::ok).filter(|p| p.is_dir()));
        }

        candidates.sort();
        let device_dir = candidates.into_iter().next().ok_or_else(|| {
            SensorError::init(
                SensorKind::Temperature,
                format!("no 1-Wire thermometer found in {}", devices_dir.display()),
            )
        })?;

        let id = device_dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self::open(devices_dir, &id)
    }

    /// Open a specific thermometer by its 1-Wire id (e.g. `28-0316a2795aff`).
    pub fn open(devices_dir: &Path, id: &str) -> Result<Self, SensorError> {
        let slave_file = devices_dir.join(id).join("w1_slave");
        if !slave_file.is_file() {
            return Err(SensorError::init(
                SensorKind::Temperature,
                format!("{} does not exist", slave_file.display()),
            ));
        }

        debug!(id, path = %slave_file.display(), "Opened 1-Wire thermometer");

        Ok(Self {
            id: id.to_string(),
            slave_file,
        })
    }

    /// The 1-Wire device id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Trigger a conversion and return the temperature in °C.
    ///
    /// Blocks for the duration of the conversion (up to ~750 ms at 12-bit
    /// resolution).
    pub fn read_celsius(&self) -> Result<f64, SensorError> {
        let contents = fs::read_to_string(&self.slave_file).map_err(|e| {
            SensorError::read(
                SensorKind::Temperature,
                format!("{}: {}", self.slave_file.display(), e),
            )
        })?;
        parse_w1_slave(&contents)
    }
}

/// Parse the contents of a `w1_slave` file into °C.
pub fn parse_w1_slave(contents: &str) -> Result<f64, SensorError> {
    let mut lines = contents.lines();

    let crc_line = lines.next().unwrap_or_default();
    if !crc_line.trim_end().ends_with("YES") {
        return Err(SensorError::read(
            SensorKind::Temperature,
            "sensor not ready (CRC check failed)",
        ));
    }

    let value_line = lines.next().unwrap_or_default();
    let millidegrees: i64 = temperature_pattern()
        .captures(value_line)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| {
            SensorError::read(
                SensorKind::Temperature,
                format!("no temperature value in '{}'", value_line.trim()),
            )
        })?;

    if millidegrees == RESET_VALUE_MILLIDEGREES {
        return Err(SensorError::read(
            SensorKind::Temperature,
            "sensor returned its power-on reset value",
        ));
    }

    Ok(millidegrees as f64 / 1000.0)
}

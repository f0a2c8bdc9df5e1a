//! Digital input pin via the sysfs GPIO interface.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{SensorError, SensorKind};

/// Default sysfs GPIO root.
pub const DEFAULT_GPIO_DIR: &str = "/sys/class/gpio";

/// A GPIO pin configured as an input.
///
/// The pin is "active" when its level is high.
#[derive(Debug, Clone)]
pub struct DigitalInput {
    pin: u32,
    value_file: PathBuf,
}

impl DigitalInput {
    /// Export `pin` (if needed), configure it as an input and check that its
    /// level can be read.
    pub fn open(gpio_dir: &Path, pin: u32) -> Result<Self, SensorError> {
        let pin_dir = gpio_dir.join(format!("gpio{}", pin));

        if !pin_dir.is_dir() {
            let export = gpio_dir.join("export");
            fs::write(&export, pin.to_string()).map_err(|e| {
                SensorError::init(
                    SensorKind::Moisture,
                    format!("cannot export GPIO {} via {}: {}", pin, export.display(), e),
                )
            })?;
            if !pin_dir.is_dir() {
                return Err(SensorError::init(
                    SensorKind::Moisture,
                    format!("GPIO {} did not appear after export", pin),
                ));
            }
            debug!(pin, "Exported GPIO pin");
        }

        fs::write(pin_dir.join("direction"), "in").map_err(|e| {
            SensorError::init(
                SensorKind::Moisture,
                format!("cannot set GPIO {} direction: {}", pin, e),
            )
        })?;

        let input = Self {
            pin,
            value_file: pin_dir.join("value"),
        };
        input.is_active().map_err(SensorError::into_init)?;

        Ok(input)
    }

    /// The BCM pin number.
    pub fn pin(&self) -> u32 {
        self.pin
    }

    /// Sample the current level.
    pub fn is_active(&self) -> Result<bool, SensorError> {
        let raw = fs::read_to_string(&self.value_file).map_err(|e| {
            SensorError::read(
                SensorKind::Moisture,
                format!("GPIO {}: {}", self.pin, e),
            )
        })?;

        match raw.trim() {
            "1" => Ok(true),
            "0" => Ok(false),
            other => Err(SensorError::read(
                SensorKind::Moisture,
                format!("GPIO {}: unexpected value '{}'", self.pin, other),
            )),
        }
    }
}

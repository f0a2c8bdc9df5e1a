//! Sensor access.
//!
//! The daemon reads two sensors: a 1-Wire thermometer and a digital soil
//! moisture sensor. Both sit behind the [`SensorReader`] trait, which has two
//! implementations:
//!
//! - [`HardwareSensors`] reads the physical devices through sysfs.
//! - [`FallbackSensors`] returns fixed placeholder values.
//!
//! Which one is used is decided exactly once by [`initialize`] at startup.
//! There is no hot-reconnect: a daemon that started in fallback mode stays
//! there until it is restarted.
//!
//! # Moisture polarity
//!
//! The moisture sensor's comparator output is active-low: the pin reads
//! "active" when the soil is **dry**. `read_moisture` reports the raw level;
//! the inversion to "wet" happens in the response layer.

mod error;
mod fallback;
mod gpio;
mod hardware;
mod w1;

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

pub use error::{SensorError, SensorKind};
pub use fallback::{FallbackSensors, FALLBACK_MOISTURE_ACTIVE, FALLBACK_TEMPERATURE};
pub use gpio::{DigitalInput, DEFAULT_GPIO_DIR};
pub use hardware::HardwareSensors;
pub use w1::{parse_w1_slave, W1Thermometer, DEFAULT_W1_DEVICES_DIR, THERMOMETER_FAMILIES};

/// BCM pin the soil moisture sensor is wired to by default.
pub const DEFAULT_SOIL_PIN: u32 = 17;

/// Operating mode of the sensor layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorMode {
    /// Hardware initialized; readings come from the devices.
    Ready,
    /// Hardware unavailable at startup; readings are placeholders.
    FallbackMode,
}

impl SensorMode {
    /// Short label for logs and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorMode::Ready => "hardware",
            SensorMode::FallbackMode => "simulated",
        }
    }
}

/// One instantaneous sample of both sensors.
///
/// A `None` field marks a failed read of that sensor only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Raw temperature in °C (uncalibrated).
    pub temperature: Option<f64>,
    /// Raw moisture sensor level; `true` means dry.
    pub moisture_active: Option<bool>,
    /// Mode of the reader that produced this sample.
    pub mode: SensorMode,
}

impl SensorReading {
    /// A sample in which both reads failed.
    pub const fn unavailable(mode: SensorMode) -> Self {
        Self {
            temperature: None,
            moisture_active: None,
            mode,
        }
    }
}

/// Read access to the plant's sensors.
///
/// Reads are synchronous and may block for as long as the underlying driver
/// takes. Implementations must be usable from several threads at once.
pub trait SensorReader: Send + Sync {
    /// Mode this reader was created in. Never changes.
    fn mode(&self) -> SensorMode;

    /// Read the temperature in °C.
    fn read_temperature(&self) -> Result<f64, SensorError>;

    /// Read the raw moisture level (`true` = active = dry).
    fn read_moisture(&self) -> Result<bool, SensorError>;

    /// Read both sensors independently.
    ///
    /// A failure of one read is logged and recorded as `None`; it does not
    /// prevent the other read.
    fn read(&self) -> SensorReading {
        let temperature = self
            .read_temperature()
            .inspect_err(|e| debug!(error = %e, "Temperature read failed"))
            .ok();
        let moisture_active = self
            .read_moisture()
            .inspect_err(|e| debug!(error = %e, "Moisture read failed"))
            .ok();

        SensorReading {
            temperature,
            moisture_active,
            mode: self.mode(),
        }
    }
}

/// Where to find the sensor hardware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorConfig {
    /// BCM pin of the soil moisture sensor.
    pub soil_pin: u32,
    /// Sysfs directory holding 1-Wire devices.
    pub w1_devices_dir: PathBuf,
    /// Sysfs GPIO root.
    pub gpio_dir: PathBuf,
    /// Explicit thermometer id; `None` picks the first one found.
    pub thermometer_id: Option<String>,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            soil_pin: DEFAULT_SOIL_PIN,
            w1_devices_dir: PathBuf::from(DEFAULT_W1_DEVICES_DIR),
            gpio_dir: PathBuf::from(DEFAULT_GPIO_DIR),
            thermometer_id: None,
        }
    }
}

impl SensorConfig {
    /// Set the soil sensor pin.
    pub fn with_soil_pin(mut self, pin: u32) -> Self {
        self.soil_pin = pin;
        self
    }

    /// Set the 1-Wire devices directory.
    pub fn with_w1_devices_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.w1_devices_dir = dir.into();
        self
    }

    /// Set the GPIO root directory.
    pub fn with_gpio_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.gpio_dir = dir.into();
        self
    }

    /// Use a specific thermometer instead of discovering one.
    pub fn with_thermometer_id(mut self, id: impl Into<String>) -> Self {
        self.thermometer_id = Some(id.into());
        self
    }
}

/// Bring up the sensor layer.
///
/// Tries to open the hardware once. If that fails for any reason the daemon
/// keeps running on [`FallbackSensors`]; the failure is logged as a warning
/// and never retried.
pub fn initialize(config: &SensorConfig) -> Arc<dyn SensorReader> {
    match HardwareSensors::open(config) {
        Ok(sensors) => {
            info!(
                thermometer = sensors.thermometer_id(),
                soil_pin = config.soil_pin,
                "Sensors initialized"
            );
            Arc::new(sensors)
        }
        Err(e) => {
            warn!(
                error = %e,
                "Could not initialize sensors, serving simulated readings"
            );
            Arc::new(FallbackSensors)
        }
    }
}

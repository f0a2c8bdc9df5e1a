//! Hardware-backed sensor reader.

use super::error::SensorError;
use super::gpio::DigitalInput;
use super::w1::W1Thermometer;
use super::{SensorConfig, SensorMode, SensorReader};

/// Reads the physical thermometer and soil moisture pin.
#[derive(Debug, Clone)]
pub struct HardwareSensors {
    thermometer: W1Thermometer,
    soil: DigitalInput,
}

impl HardwareSensors {
    /// Open both devices described by `config`.
    ///
    /// Fails with [`SensorError::Init`] if either device is missing.
    pub fn open(config: &SensorConfig) -> Result<Self, SensorError> {
        let thermometer = match &config.thermometer_id {
            Some(id) => W1Thermometer::open(&config.w1_devices_dir, id)?,
            None => W1Thermometer::discover(&config.w1_devices_dir)?,
        };
        let soil = DigitalInput::open(&config.gpio_dir, config.soil_pin)?;

        Ok(Self { thermometer, soil })
    }

    /// Id of the thermometer in use.
    pub fn thermometer_id(&self) -> &str {
        self.thermometer.id()
    }
}

impl SensorReader for HardwareSensors {
    fn mode(&self) -> SensorMode {
        SensorMode::Ready
    }

    fn read_temperature(&self) -> Result<f64, SensorError> {
        self.thermometer.read_celsius()
    }

    fn read_moisture(&self) -> Result<bool, SensorError> {
        self.soil.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::gpio::tests::write_pin;
    use crate::sensor::w1::tests::write_probe;

    #[test]
    fn test_open_with_explicit_thermometer() {
        let w1 = tempfile::tempdir().unwrap();
        let gpio = tempfile::tempdir().unwrap();
        write_probe(w1.path(), "28-0000000000aa", 10_000);
        write_probe(w1.path(), "28-0000000000bb", 30_000);
        write_pin(gpio.path(), 27, "0");

        let config = SensorConfig::default()
            .with_w1_devices_dir(w1.path())
            .with_gpio_dir(gpio.path())
            .with_soil_pin(27)
            .with_thermometer_id("28-0000000000bb");

        let sensors = HardwareSensors::open(&config).unwrap();
        assert_eq!(sensors.thermometer_id(), "28-0000000000bb");
        assert_eq!(sensors.read_temperature().unwrap(), 30.0);
        assert!(!sensors.read_moisture().unwrap());
    }

    #[test]
    fn test_temperature_failure_does_not_affect_moisture() {
        let w1 = tempfile::tempdir().unwrap();
        let gpio = tempfile::tempdir().unwrap();
        write_probe(w1.path(), "28-0316a2795aff", 22_300);
        write_pin(gpio.path(), 17, "1");

        let config = SensorConfig::default()
            .with_w1_devices_dir(w1.path())
            .with_gpio_dir(gpio.path());
        let sensors = HardwareSensors::open(&config).unwrap();

        std::fs::write(
            w1.path().join("28-0316a2795aff/w1_slave"),
            "ff ff ff ff ff ff ff ff ff : crc=c9 NO\n",
        )
        .unwrap();

        let reading = sensors.read();
        assert_eq!(reading.temperature, None);
        assert_eq!(reading.moisture_active, Some(true));
        assert_eq!(reading.mode, SensorMode::Ready);
    }
}

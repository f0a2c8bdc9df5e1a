//! Read command - take one reading and print it.
//!
//! Uses the same sensor initialization and response shaping as the daemon,
//! so the output matches what `GET /data` would return.

use std::path::Path;

use plantmon::calibration::CalibrationStore;
use plantmon::response::{MonitorResponse, ResponseBuilder};
use plantmon::sensor::{self, SensorConfig, SensorMode};

use super::common::load_config;
use crate::error::CliError;

/// Run the read command.
pub fn run(config_path: Option<&Path>, offset: f64) -> Result<(), CliError> {
    if offset.is_nan() {
        return Err(CliError::InvalidArgument(
            "offset must be a number, got NaN".to_string(),
        ));
    }

    let config = load_config(config_path)?;
    let (mode, response) = read_once(&config.sensors, offset);

    if mode == SensorMode::FallbackMode {
        eprintln!("Sensors unavailable, showing simulated values.");
    }
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn read_once(sensors: &SensorConfig, offset: f64) -> (SensorMode, MonitorResponse) {
    let reader = sensor::initialize(sensors);
    let calibration = CalibrationStore::new();
    calibration.set(offset);

    let reading = reader.read();
    (reading.mode, ResponseBuilder::new(&calibration).build(&reading))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_hardware() -> SensorConfig {
        SensorConfig::default()
            .with_w1_devices_dir("/nonexistent/w1")
            .with_gpio_dir("/nonexistent/gpio")
    }

    #[test]
    fn test_read_without_hardware_is_simulated() {
        let (mode, response) = read_once(&missing_hardware(), 3.0);
        assert_eq!(mode, SensorMode::FallbackMode);
        assert_eq!(response.temperature, Some(20.0));
        assert_eq!(response.is_wet, Some(false));
        assert_eq!(response.calibration_offset, 3.0);
    }

    #[test]
    fn test_read_clamps_offset() {
        let (_, response) = read_once(&missing_hardware(), 42.0);
        assert_eq!(response.calibration_offset, 10.0);

        let (_, response) = read_once(&missing_hardware(), f64::NEG_INFINITY);
        assert_eq!(response.calibration_offset, -10.0);
    }

    #[test]
    fn test_read_rejects_nan_offset() {
        let result = run(None, f64::NAN);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }
}

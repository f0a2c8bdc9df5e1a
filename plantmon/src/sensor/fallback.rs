//! Placeholder readings used when the hardware could not be opened.

use super::error::SensorError;
use super::{SensorMode, SensorReader};

/// Temperature reported in fallback mode (°C).
pub const FALLBACK_TEMPERATURE: f64 = 20.0;

/// Moisture value reported in fallback mode ("dry").
pub const FALLBACK_MOISTURE_ACTIVE: bool = false;

/// Reader that never touches hardware.
///
/// Its values are already in response terms: the response layer reports them
/// as-is, without calibration or polarity inversion.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackSensors;

impl SensorReader for FallbackSensors {
    fn mode(&self) -> SensorMode {
        SensorMode::FallbackMode
    }

    fn read_temperature(&self) -> Result<f64, SensorError> {
        Ok(FALLBACK_TEMPERATURE)
    }

    fn read_moisture(&self) -> Result<bool, SensorError> {
        Ok(FALLBACK_MOISTURE_ACTIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_readings_are_constant() {
        let sensors = FallbackSensors;
        for _ in 0..3 {
            let reading = sensors.read();
            assert_eq!(reading.temperature, Some(20.0));
            assert_eq!(reading.moisture_active, Some(false));
            assert_eq!(reading.mode, SensorMode::FallbackMode);
        }
    }
}

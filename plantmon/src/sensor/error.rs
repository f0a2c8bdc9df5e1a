//! Error types for sensor access.

use std::fmt;

use thiserror::Error;

/// Which physical sensor an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    /// 1-Wire temperature probe.
    Temperature,
    /// Digital soil moisture sensor.
    Moisture,
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorKind::Temperature => write!(f, "temperature"),
            SensorKind::Moisture => write!(f, "moisture"),
        }
    }
}

/// Errors that can occur while opening or reading a sensor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SensorError {
    /// The sensor could not be brought up at startup.
    ///
    /// Only produced while opening hardware; the startup routine turns it
    /// into permanent fallback mode.
    #[error("{sensor} sensor failed to initialize: {reason}")]
    Init { sensor: SensorKind, reason: String },

    /// A single read failed. Transient; surfaced as a missing value.
    #[error("{sensor} sensor read failed: {reason}")]
    Read { sensor: SensorKind, reason: String },
}

impl SensorError {
    /// Create an initialization error.
    pub fn init(sensor: SensorKind, reason: impl Into<String>) -> Self {
        SensorError::Init {
            sensor,
            reason: reason.into(),
        }
    }

    /// Create a read error.
    pub fn read(sensor: SensorKind, reason: impl Into<String>) -> Self {
        SensorError::Read {
            sensor,
            reason: reason.into(),
        }
    }

    /// The sensor this error refers to.
    pub fn sensor(&self) -> SensorKind {
        match self {
            SensorError::Init { sensor, .. } | SensorError::Read { sensor, .. } => *sensor,
        }
    }

    /// Re-tag a read failure that happened during startup as an init failure.
    pub(crate) fn into_init(self) -> Self {
        match self {
            SensorError::Read { sensor, reason } => SensorError::Init { sensor, reason },
            init => init,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_error_display() {
        let err = SensorError::init(SensorKind::Temperature, "no 1-Wire device found");
        assert_eq!(
            err.to_string(),
            "temperature sensor failed to initialize: no 1-Wire device found"
        );

        let err = SensorError::read(SensorKind::Moisture, "unexpected value 'x'");
        assert_eq!(
            err.to_string(),
            "moisture sensor read failed: unexpected value 'x'"
        );
    }

    #[test]
    fn test_into_init_retags_read_errors() {
        let err = SensorError::read(SensorKind::Moisture, "permission denied").into_init();
        assert!(matches!(err, SensorError::Init { .. }));
        assert_eq!(err.sensor(), SensorKind::Moisture);
    }
}

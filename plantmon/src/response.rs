//! Builds the externally visible reading from a sensor sample and the
//! current calibration offset.

use serde::Serialize;

use crate::calibration::CalibrationStore;
use crate::sensor::{SensorMode, SensorReading};

/// Body of `GET /data`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonitorResponse {
    /// Calibrated temperature in °C, `null` if the read failed.
    pub temperature: Option<f64>,
    /// Whether the soil is wet, `null` if the read failed.
    pub is_wet: Option<bool>,
    /// Offset in effect when the response was built.
    pub calibration_offset: f64,
}

/// Combines sensor samples with the calibration store.
#[derive(Debug, Clone, Copy)]
pub struct ResponseBuilder<'a> {
    calibration: &'a CalibrationStore,
}

impl<'a> ResponseBuilder<'a> {
    pub fn new(calibration: &'a CalibrationStore) -> Self {
        Self { calibration }
    }

    /// Build the response for `reading`.
    ///
    /// The offset is read here, not when the sample was taken, so a
    /// concurrent calibration update that lands in between wins.
    ///
    /// In fallback mode the placeholder values are passed through untouched:
    /// no offset is added and the moisture flag is not inverted.
    pub fn build(&self, reading: &SensorReading) -> MonitorResponse {
        let offset = self.calibration.get();

        match reading.mode {
            SensorMode::Ready => MonitorResponse {
                temperature: reading.temperature.map(|raw| raw + offset),
                is_wet: reading.moisture_active.map(|active| !active),
                calibration_offset: offset,
            },
            SensorMode::FallbackMode => MonitorResponse {
                temperature: reading.temperature,
                is_wet: reading.moisture_active,
                calibration_offset: offset,
            },
        }
    }
}

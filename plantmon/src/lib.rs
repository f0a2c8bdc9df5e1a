//! Plantmon - temperature and soil moisture monitoring for a single plant
//!
//! This library provides the sensor access, calibration state, and HTTP API
//! for an always-on plant monitoring daemon running on a Raspberry Pi.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  api (axum)      GET /data   POST /calibrate   GET /             │
//! └──────────────────────────────────────────────────────────────────┘
//!            │                        │
//!            ▼                        ▼
//! ┌──────────────────────┐   ┌──────────────────────┐
//! │  ResponseBuilder     │──►│  CalibrationStore    │
//! └──────────────────────┘   └──────────────────────┘
//!            │
//!            ▼
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  SensorReader (chosen once at startup)                           │
//! │    HardwareSensors: W1Thermometer + DigitalInput                 │
//! │    FallbackSensors: fixed placeholder readings                   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod app;
pub mod calibration;
pub mod config;
pub mod logging;
pub mod response;
pub mod sensor;

/// Crate version, reported in the startup banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

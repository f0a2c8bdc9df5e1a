//! HTTP API.
//!
//! | Method | Path         | Purpose                                  |
//! |--------|--------------|------------------------------------------|
//! | GET    | `/`          | Dashboard page                           |
//! | GET    | `/data`      | Current reading (always 200)             |
//! | POST   | `/calibrate` | Set the calibration offset               |
//!
//! Every response carries `Access-Control-Allow-Origin: *` so the dashboard
//! can be opened from another host.

mod cors;
mod error;
mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{middleware, Router};

use crate::calibration::CalibrationStore;
use crate::sensor::SensorReader;

pub use error::{ApiError, StatusBody};
pub use handlers::parse_offset;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    sensors: Arc<dyn SensorReader>,
    calibration: Arc<CalibrationStore>,
}

impl AppState {
    pub fn new(sensors: Arc<dyn SensorReader>, calibration: Arc<CalibrationStore>) -> Self {
        Self {
            sensors,
            calibration,
        }
    }

    /// The sensor reader selected at startup.
    pub fn sensors(&self) -> &Arc<dyn SensorReader> {
        &self.sensors
    }

    /// The calibration store.
    pub fn calibration(&self) -> &Arc<CalibrationStore> {
        &self.calibration
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/data", get(handlers::get_data))
        .route("/calibrate", post(handlers::calibrate))
        .layer(middleware::from_fn(cors::allow_any_origin))
        .with_state(state)
}

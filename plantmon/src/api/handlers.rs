//! Request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use bytes::Bytes;
use serde_json::Value;
use tracing::{info, warn};

use super::error::{ApiError, StatusBody};
use super::AppState;
use crate::response::{MonitorResponse, ResponseBuilder};
use crate::sensor::SensorReading;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// `GET /` - dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /data` - sample both sensors and report the calibrated reading.
///
/// Sensor reads block, so they run on the blocking pool. This handler never
/// fails: anything that goes wrong while sampling shows up as `null` fields.
pub async fn get_data(State(state): State<AppState>) -> Json<MonitorResponse> {
    let sensors = Arc::clone(state.sensors());
    let mode = sensors.mode();

    let reading = tokio::task::spawn_blocking(move || sensors.read())
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "Sensor read task failed");
            SensorReading::unavailable(mode)
        });

    Json(ResponseBuilder::new(state.calibration()).build(&reading))
}

/// `POST /calibrate` - set the calibration offset.
///
/// The body is parsed by hand rather than through the `Json` extractor so that
/// every malformed request gets the same `{"status": "error"}` reply.
pub async fn calibrate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<StatusBody>, ApiError> {
    let offset = parse_offset(&body)?;
    info!(offset, "Received calibration request");

    state.calibration().set(offset);
    Ok(Json(StatusBody::success()))
}

/// Extract the requested offset from a calibration request body.
///
/// Accepts `{"offset": 2.5}` and `{"offset": "2.5"}`; the dashboard slider
/// posts its value as a string. Numbers too large for an `f64` come through
/// as infinities and are clamped by the store like any other out-of-range
/// value. NaN and non-numeric values are rejected.
pub fn parse_offset(body: &[u8]) -> Result<f64, ApiError> {
    let request: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::InvalidCalibrationInput(format!("malformed JSON: {}", e)))?;

    let value = match request.get("offset") {
        None | Some(Value::Null) => {
            return Err(ApiError::InvalidCalibrationInput(
                "missing offset".to_string(),
            ))
        }
        Some(value) => value,
    };

    let offset = match value {
        // Number text is kept verbatim, so `1e400` parses to infinity here
        Value::Number(n) => n.to_string().parse::<f64>().ok(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    offset.filter(|o| !o.is_nan()).ok_or_else(|| {
        ApiError::InvalidCalibrationInput(format!("offset is not a number: {}", value))
    })
}

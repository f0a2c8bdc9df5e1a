//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// `{"status": ...}` acknowledgement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

impl StatusBody {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }

    pub fn error() -> Self {
        Self {
            status: "error".to_string(),
        }
    }
}

/// Errors returned to API clients.
///
/// Sensor failures never show up here; they degrade to `null` fields.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Calibration request without a usable numeric `offset`.
    #[error("invalid calibration input: {0}")]
    InvalidCalibrationInput(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Rejected request");
        match self {
            ApiError::InvalidCalibrationInput(_) => {
                (StatusCode::BAD_REQUEST, Json(StatusBody::error())).into_response()
            }
        }
    }
}

//! Application bootstrap implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::config::AppConfig;
use super::error::AppError;
use crate::api::{self, AppState};
use crate::calibration::CalibrationStore;
use crate::sensor::{self, SensorMode};

/// The plant monitor daemon: sensors, calibration state and a bound listener.
///
/// Sensor mode is decided in [`start`](Self::start) and never revisited.
pub struct PlantMonitorApp {
    state: AppState,
    listener: TcpListener,
    local_addr: SocketAddr,
}

impl PlantMonitorApp {
    /// Initialize sensors and calibration, then bind the listener.
    ///
    /// Missing sensor hardware is not an error (the app starts in fallback
    /// mode); failing to bind is.
    pub async fn start(config: AppConfig) -> Result<Self, AppError> {
        info!("Starting plant monitor v{}", crate::VERSION);

        let sensors = sensor::initialize(&config.sensors);
        let calibration = Arc::new(CalibrationStore::new());

        let addr = config.socket_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| AppError::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| AppError::Bind { addr, source })?;

        info!(
            address = %local_addr,
            sensor_mode = sensors.mode().as_str(),
            "HTTP API listening"
        );

        Ok(Self {
            state: AppState::new(sensors, calibration),
            listener,
            local_addr,
        })
    }

    /// Address actually bound (useful when the configured port was 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Sensor mode selected at startup.
    pub fn sensor_mode(&self) -> SensorMode {
        self.state.sensors().mode()
    }

    /// Shared handler state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Serve the API until `shutdown` is cancelled.
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn serve(self, shutdown: CancellationToken) -> Result<(), AppError> {
        let router = api::router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await
            .map_err(AppError::Serve)?;

        info!("HTTP API stopped");
        Ok(())
    }

    /// Start and serve on a dedicated runtime, blocking the calling thread.
    ///
    /// Ctrl+C and SIGTERM cancel `shutdown`.
    pub fn run_blocking(config: AppConfig, shutdown: CancellationToken) -> Result<(), AppError> {
        let runtime = Runtime::new().map_err(|e| AppError::RuntimeCreation(e.to_string()))?;

        runtime.block_on(async move {
            let app = Self::start(config).await?;

            let signal_token = shutdown.clone();
            tokio::spawn(async move {
                wait_for_shutdown_signal().await;
                signal_token.cancel();
            });

            app.serve(shutdown).await
        })
    }
}

/// Resolve on Ctrl+C or, on Unix, SIGTERM.
pub async fn wait_for_shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::SensorConfig;

    fn loopback_config(sensors: SensorConfig) -> AppConfig {
        AppConfig::default()
            .with_bind("127.0.0.1".parse().unwrap())
            .with_port(0)
            .with_sensors(sensors)
    }

    #[tokio::test]
    async fn test_start_without_hardware_uses_fallback() {
        let sensors = SensorConfig::default()
            .with_w1_devices_dir("/nonexistent/w1")
            .with_gpio_dir("/nonexistent/gpio");

        let app = PlantMonitorApp::start(loopback_config(sensors)).await.unwrap();
        assert_eq!(app.sensor_mode(), SensorMode::FallbackMode);
        assert_ne!(app.local_addr().port(), 0);
        assert_eq!(app.state().calibration().get(), 0.0);
    }

    #[tokio::test]
    async fn test_bind_conflict_is_error() {
        let first = PlantMonitorApp::start(loopback_config(SensorConfig::default()))
            .await
            .unwrap();
        let taken = first.local_addr().port();

        let result =
            PlantMonitorApp::start(loopback_config(SensorConfig::default()).with_port(taken)).await;
        assert!(matches!(result, Err(AppError::Bind { .. })));
    }

    #[tokio::test]
    async fn test_serve_stops_on_cancel() {
        let app = PlantMonitorApp::start(loopback_config(SensorConfig::default()))
            .await
            .unwrap();
        let shutdown = CancellationToken::new();

        let server = tokio::spawn(app.serve(shutdown.clone()));
        shutdown.cancel();

        let result = tokio::time::timeout(std::time::Duration::from_secs(5), server)
            .await
            .expect("server did not stop")
            .unwrap();
        assert!(result.is_ok());
    }
}

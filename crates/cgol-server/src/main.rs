//! Word endpoint binary for the CGOL word engine.
//!
//! Serves `POST /cgol` and `GET /health` until Ctrl-C.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `cgol-config.yaml` (or `$CGOL_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the engine from the `engine` section
//! 4. Serve HTTP until a shutdown signal arrives

mod error;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use cgol_api::{AppState, ServerConfig};
use cgol_engine::{Engine, LogFormat, LoggingConfig, ServiceConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::ServerBinError;

/// Config file used when `CGOL_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "cgol-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the listener cannot
/// bind, or serving fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = config_path();
    let config = ServiceConfig::load_or_default(&config_path).map_err(ServerBinError::from)?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!(
        config_path = %config_path.display(),
        board_size = config.engine.board_size,
        max_generations = config.engine.max_generations,
        encoding = ?config.engine.encoding,
        scoring = ?config.engine.scoring,
        "cgol-server starting"
    );

    // 3. Build the engine.
    let engine = Engine::new(config.engine).map_err(ServerBinError::from)?;
    let state = Arc::new(
        AppState::new(engine)
            .with_timeout(Duration::from_millis(config.server.request_timeout_ms)),
    );

    // 4. Serve.
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    cgol_api::start_server(&server_config, state, shutdown_signal())
        .await
        .map_err(ServerBinError::from)?;

    info!("cgol-server shutdown complete");
    Ok(())
}

/// Resolve the config file path from `CGOL_CONFIG`.
fn config_path() -> PathBuf {
    std::env::var_os("CGOL_CONFIG").map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        // Without a signal handler, keep serving.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

//! Error types for the server binary.

/// Top-level error for the server binary.
///
/// Wraps every failure mode during startup and serving so `main` can
/// propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ServerBinError {
    /// Configuration loading or validation failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: cgol_engine::ConfigError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: cgol_api::ServerError,
    },
}

//! Shared application state for the word endpoint.

use std::sync::Arc;
use std::time::Duration;

use cgol_engine::Engine;

/// Default per-request simulation deadline.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// engine is immutable after startup, so no lock is needed.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The configured simulation engine.
    pub engine: Arc<Engine>,
    /// Deadline for one simulation.
    pub request_timeout: Duration,
}

impl AppState {
    /// Create state around `engine` with the default deadline.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(engine),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Replace the per-request deadline.
    #[must_use]
    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Engine::default())
    }
}

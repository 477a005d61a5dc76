//! Sources of simulation results for the CLI.
//!
//! Uses enum dispatch like the chat client: either the HTTP word
//! endpoint or an in-process [`Engine`].

use std::sync::Arc;

use cgol_engine::Engine;
use cgol_types::{CgolRequest, SimulationResult};
use tracing::debug;

use crate::error::CliError;

/// Where simulation results come from.
pub enum ConwayClient {
    /// `POST {"word": ...}` to a word endpoint.
    Remote(RemoteConway),
    /// Run the engine in this process.
    Local(Arc<Engine>),
}

impl ConwayClient {
    /// Client for the word endpoint at `url`.
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote(RemoteConway::new(url))
    }

    /// Client that simulates in-process with `engine`.
    pub fn local(engine: Engine) -> Self {
        Self::Local(Arc::new(engine))
    }

    /// Simulate `word`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Conway`] if the endpoint is unreachable, answers
    /// with a non-success status, or sends an unparseable body, or if the
    /// local worker task fails.
    pub async fn simulate(&self, word: &str) -> Result<SimulationResult, CliError> {
        match self {
            Self::Remote(remote) => remote.simulate(word).await,
            Self::Local(engine) => {
                let engine = Arc::clone(engine);
                let word = word.to_owned();
                tokio::task::spawn_blocking(move || engine.simulate(&word))
                    .await
                    .map_err(|e| CliError::Conway(format!("local simulation failed: {e}")))
            }
        }
    }

    /// Human-readable name for logging.
    pub const fn name(&self) -> &str {
        match self {
            Self::Remote(_) => "remote",
            Self::Local(_) => "local",
        }
    }
}

/// HTTP client for a word endpoint.
pub struct RemoteConway {
    client: reqwest::Client,
    url: String,
}

impl RemoteConway {
    /// Create a client for the full endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    async fn simulate(&self, word: &str) -> Result<SimulationResult, CliError> {
        let response = self
            .client
            .post(&self.url)
            .json(&CgolRequest::new(word))
            .send()
            .await
            .map_err(|e| CliError::Conway(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(CliError::Conway(format!("returned {status}: {error_body}")));
        }

        let result: SimulationResult = response
            .json()
            .await
            .map_err(|e| CliError::Conway(format!("response parse failed: {e}")))?;

        debug!(
            word,
            generations = result.generations,
            score = result.score,
            "word endpoint answered"
        );
        Ok(result)
    }
}

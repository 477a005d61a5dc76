//! REST endpoint handlers for the word endpoint.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/cgol` | Simulate a word, return `(generations, score)` |
//! | `GET` | `/health` | Liveness and engine parameters |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use cgol_types::{CgolRequest, HealthStatus, SimulationResult};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /cgol -- simulate a word
// ---------------------------------------------------------------------------

/// Run the simulation for the requested word.
///
/// The engine call is CPU-bound and not interruptible mid-step, so it runs
/// on the blocking pool. If the deadline passes first the client gets a
/// 504; the worker finishes in the background and its result is dropped.
pub async fn simulate_word(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CgolRequest>,
) -> Result<Json<SimulationResult>, ApiError> {
    let engine = Arc::clone(&state.engine);
    let word = request.word;
    let word_len = word.chars().count();

    let task = tokio::task::spawn_blocking(move || engine.simulate(&word));

    let joined = tokio::time::timeout(state.request_timeout, task)
        .await
        .map_err(|elapsed| {
            warn!(word_len, error = %elapsed, "simulation deadline exceeded");
            ApiError::Timeout {
                timeout_ms: state.request_timeout.as_millis(),
            }
        })?;
    let result = joined.map_err(|e| ApiError::Worker(e.to_string()))?;

    info!(
        word_len,
        generations = result.generations,
        score = result.score,
        "word simulated"
    );
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// GET /health -- liveness
// ---------------------------------------------------------------------------

/// Report liveness and the engine's fixed parameters.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    let config = state.engine.config();
    Json(HealthStatus {
        status: String::from("ok"),
        board_size: config.board_size,
        max_generations: config.max_generations,
    })
}

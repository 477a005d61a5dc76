//! JSON bodies exchanged with the word endpoint.
//!
//! `POST /cgol` takes a [`CgolRequest`] and answers with a
//! [`SimulationResult`]; `GET /health` answers with a [`HealthStatus`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body of a `POST /cgol` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CgolRequest {
    /// The word that seeds the initial board. Any string is accepted,
    /// including the empty string.
    pub word: String,
}

impl CgolRequest {
    /// Build a request for the given word.
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

/// Outcome of one simulation: the `(generations, score)` pair.
///
/// Runs that stopped on a detected repeat and runs that hit the
/// generation cap are deliberately indistinguishable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationResult {
    /// Generation index at which the run terminated.
    pub generations: u32,
    /// Score derived from the whole recorded trace.
    #[ts(type = "number")]
    pub score: u64,
}

impl SimulationResult {
    /// Construct a result pair.
    pub const fn new(generations: u32, score: u64) -> Self {
        Self { generations, score }
    }
}

/// Body of a `GET /health` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HealthStatus {
    /// Always `"ok"` while the server is answering.
    pub status: String,
    /// Side length N of every board the engine builds.
    #[ts(type = "number")]
    pub board_size: usize,
    /// Hard cap on generations per run.
    pub max_generations: u32,
}

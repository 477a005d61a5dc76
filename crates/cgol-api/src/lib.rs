//! HTTP word endpoint for the CGOL word engine.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`POST /cgol`** -- run the simulation for `{"word": ...}` and answer
//!   with `{"generations": ..., "score": ...}`
//! - **`GET /health`** -- liveness plus the engine's board size and cap
//!
//! # Architecture
//!
//! The shared [`AppState`] holds one [`Engine`] behind an [`Arc`]. Each
//! request runs its simulation on Tokio's blocking pool under a deadline,
//! so a slow word never stalls the async workers. Malformed bodies are
//! rejected by the `Json` extractor before the engine is reached.
//!
//! [`Engine`]: cgol_engine::Engine
//! [`Arc`]: std::sync::Arc

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;

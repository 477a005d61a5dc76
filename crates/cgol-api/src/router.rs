//! Axum router construction for the word endpoint.
//!
//! Assembles all routes into a single [`Router`] with CORS and HTTP
//! tracing middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `POST /cgol` -- simulate a word
/// - `GET /health` -- liveness and engine parameters
///
/// CORS allows any origin so browser front ends on other ports can call
/// the endpoint directly.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cgol", post(handlers::simulate_word))
        .route("/health", get(handlers::health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

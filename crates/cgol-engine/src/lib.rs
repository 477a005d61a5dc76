//! Word-seeded Conway's Game of Life engine.
//!
//! Turns a word into two numbers: how many generations a Game of Life run
//! seeded from that word takes before its board repeats, and a score
//! summarizing the run.
//!
//! # Modules
//!
//! - [`board`] -- The flat N x N toroidal [`Board`] and [`CellState`].
//! - [`encoder`] -- Deterministic word-to-board encoding policies.
//! - [`automaton`] -- The B3/S23 transition function.
//! - [`detector`] -- Runs the automaton until extinction, a repeated board,
//!   or the generation cap, recording the [`Trace`].
//! - [`scorer`] -- Trace scoring policies.
//! - [`engine`] -- The [`Engine`] facade exposing `simulate`.
//! - [`config`] -- YAML configuration and validation.
//! - [`error`] -- Configuration errors.
//!
//! # Example
//!
//! ```
//! use cgol_engine::Engine;
//!
//! let engine = Engine::default();
//! let result = engine.simulate("hello");
//! assert_eq!(result, engine.simulate("hello"));
//! assert!(result.generations <= engine.config().max_generations);
//! ```
//!
//! [`Board`]: board::Board
//! [`CellState`]: board::CellState
//! [`Trace`]: detector::Trace

pub mod automaton;
pub mod board;
pub mod config;
pub mod detector;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod scorer;
mod seed;

// Re-export primary types at crate root.
pub use board::{Board, CellState};
pub use cgol_types::SimulationResult;
pub use config::{
    EncodingPolicy, EngineConfig, LogFormat, LoggingConfig, ScoringPolicy, ServerSettings,
    ServiceConfig,
};
pub use detector::{Run, Termination, Trace};
pub use engine::Engine;
pub use error::ConfigError;

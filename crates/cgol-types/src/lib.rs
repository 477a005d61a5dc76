//! Shared type definitions for the CGOL word engine.
//!
//! These are the values that cross crate and process boundaries: the
//! engine's [`SimulationResult`], and the JSON bodies of the `/cgol` and
//! `/health` endpoints. Types flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`wire`] -- Request/response bodies and the simulation result pair

pub mod wire;

pub use wire::{CgolRequest, HealthStatus, SimulationResult};

//! Configuration loading and typed config structures for the CGOL service.
//!
//! The canonical configuration lives in `cgol-config.yaml`. This module
//! defines strongly-typed structs that mirror the YAML structure, a loader
//! that reads and validates the file, and the environment overrides the
//! deployment uses for the listener address.
//!
//! Everything here is read once at startup. The [`EngineConfig`] section is
//! handed to [`Engine::new`](crate::Engine::new) and never mutated again.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Largest board side length accepted by validation.
pub const MAX_BOARD_SIZE: usize = 512;

/// Largest generation cap accepted by validation.
pub const MAX_GENERATIONS_LIMIT: u32 = 1_000_000;

/// Largest number of cells one run may record.
///
/// A run keeps every board it visits, so its trace holds up to
/// `board_size^2 * (max_generations + 1)` one-byte cells. This caps that
/// at 1 GiB per call.
pub const MAX_TRACE_CELLS: u64 = 1 << 30;

/// Top-level service configuration.
///
/// Mirrors the structure of `cgol-config.yaml`. Every field has a default,
/// so an empty document (or a missing file) yields a working service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Simulation parameters shared by every call.
    #[serde(default)]
    pub engine: EngineConfig,

    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override the listener settings:
    /// - `CGOL_HOST` overrides `server.host`
    /// - `CGOL_PORT` overrides `server.port`
    /// - `CGOL_REQUEST_TIMEOUT_MS` overrides `server.request_timeout_ms`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Load from `path` if it exists, otherwise start from defaults.
    ///
    /// Environment overrides and validation apply in both cases.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Self::from_file(path);
        }
        tracing::warn!(path = %path.display(), "config file not found, using defaults");
        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides()?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Apply `CGOL_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Split out from [`Self::apply_env_overrides`] so callers (and tests)
    /// can supply values without touching the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CGOL_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CGOL_PORT") {
            self.server.port = port.parse().map_err(|e| ConfigError::Invalid {
                field: "server.port",
                reason: format!("{port:?}: {e}"),
            })?;
        }
        if let Some(timeout) = lookup("CGOL_REQUEST_TIMEOUT_MS") {
            self.server.request_timeout_ms =
                timeout.parse().map_err(|e| ConfigError::Invalid {
                    field: "server.request_timeout_ms",
                    reason: format!("{timeout:?}: {e}"),
                })?;
        }
        Ok(())
    }
}

/// Simulation parameters: board size, generation cap, and policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Side length N of the square toroidal board.
    #[serde(default = "default_board_size")]
    pub board_size: usize,

    /// Hard cap on generations per run.
    #[serde(default = "default_max_generations")]
    pub max_generations: u32,

    /// How a word becomes the initial board.
    #[serde(default)]
    pub encoding: EncodingPolicy,

    /// How a recorded trace becomes a score.
    #[serde(default)]
    pub scoring: ScoringPolicy,
}

impl EngineConfig {
    /// Check every field against its permitted range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Invalid {
                field: "engine.board_size",
                reason: format!("{} is outside 1..={MAX_BOARD_SIZE}", self.board_size),
            });
        }
        if self.max_generations > MAX_GENERATIONS_LIMIT {
            return Err(ConfigError::Invalid {
                field: "engine.max_generations",
                reason: format!(
                    "{} exceeds the limit of {MAX_GENERATIONS_LIMIT}",
                    self.max_generations
                ),
            });
        }
        let trace_cells = self.max_trace_cells();
        if trace_cells.is_none_or(|cells| cells > MAX_TRACE_CELLS) {
            return Err(ConfigError::Invalid {
                field: "engine.max_generations",
                reason: format!(
                    "a {0}x{0} board over {1} generations exceeds {MAX_TRACE_CELLS} recorded cells",
                    self.board_size, self.max_generations
                ),
            });
        }
        if let EncodingPolicy::Scatter { density_percent } = self.encoding
            && density_percent > 100
        {
            return Err(ConfigError::Invalid {
                field: "engine.encoding.density_percent",
                reason: format!("{density_percent} is above 100"),
            });
        }
        Ok(())
    }

    /// Worst-case number of cells a single run records, or `None` on overflow.
    pub fn max_trace_cells(&self) -> Option<u64> {
        let side = u64::try_from(self.board_size).ok()?;
        side.checked_mul(side)?
            .checked_mul(u64::from(self.max_generations).checked_add(1)?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            max_generations: default_max_generations(),
            encoding: EncodingPolicy::default(),
            scoring: ScoringPolicy::default(),
        }
    }
}

/// Word-to-board encoding policy.
///
/// In YAML this is a mapping tagged by `policy`:
///
/// ```yaml
/// encoding:
///   policy: scatter
///   density_percent: 30
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum EncodingPolicy {
    /// Hash the word and scatter a fixed fraction of live cells across
    /// the whole board.
    Scatter {
        /// Percentage of cells that start alive (0-100).
        #[serde(default = "default_density_percent")]
        density_percent: u8,
    },
    /// Write the word's bytes, eight bits each, into the middle row.
    Bitstring,
}

impl Default for EncodingPolicy {
    fn default() -> Self {
        Self::Scatter {
            density_percent: default_density_percent(),
        }
    }
}

/// Trace scoring policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Total births across every transition in the trace.
    #[default]
    Births,
    /// Count of distinct cells alive at least once anywhere in the trace.
    ///
    /// Saturates at N*N for most long runs on small boards.
    DistinctCells,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deadline for a single simulation request, in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for log lines.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const fn default_board_size() -> usize {
    40
}

const fn default_max_generations() -> u32 {
    1000
}

const fn default_density_percent() -> u8 {
    30
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8000
}

const fn default_request_timeout_ms() -> u64 {
    5000
}

fn default_log_level() -> String {
    String::from("info")
}

//! The engine facade: `simulate(word) -> (generations, score)`.

use cgol_types::SimulationResult;
use tracing::{debug, trace};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::detector::{self, Run};
use crate::encoder;
use crate::error::ConfigError;
use crate::scorer;

/// A configured simulation engine.
///
/// Holds only the immutable [`EngineConfig`]. Every call builds its own
/// board and history table and drops them on return, so one `Engine` can
/// be shared across threads and called concurrently without locking.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Validate `config` and build an engine from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if any field is out of range.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this engine was built with.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The initial board for `word`.
    pub fn encode(&self, word: &str) -> Board {
        encoder::encode(word, self.config.board_size, self.config.encoding)
    }

    /// Run the simulation for `word`, keeping the full trace.
    pub fn run(&self, word: &str) -> Run {
        let initial = self.encode(word);
        trace!(
            word_len = word.len(),
            population = initial.population(),
            board = %initial,
            "initial board encoded"
        );
        detector::run_until_repeat(initial, self.config.max_generations)
    }

    /// Run the simulation for `word` and reduce it to `(generations, score)`.
    ///
    /// Total over every input string. Deterministic: the same word always
    /// yields the same pair under the same configuration.
    pub fn simulate(&self, word: &str) -> SimulationResult {
        let run = self.run(word);
        let score = scorer::score(&run.trace, self.config.scoring);
        debug!(
            word_len = word.len(),
            generations = run.generations(),
            score,
            termination = run.termination.label(),
            period = ?run.termination.period(),
            "simulation complete"
        );
        SimulationResult::new(run.generations(), score)
    }
}

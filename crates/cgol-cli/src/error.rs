//! Error types for the conversational CLI.
//!
//! None of these abort the REPL. The session turns LLM and word endpoint
//! failures into reply text; only startup (config prompts, stdin) can
//! fail the process.

/// Errors that can occur while running the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The chat completions call failed or returned an unusable body.
    #[error("LLM request failed: {0}")]
    Llm(String),

    /// The word endpoint (or the in-process engine) failed.
    #[error("word endpoint request failed: {0}")]
    Conway(String),

    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// The prompt routing pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

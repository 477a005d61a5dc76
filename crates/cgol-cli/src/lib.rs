//! Conversational command-line front end for the CGOL word engine.
//!
//! Every prompt goes to an OpenAI-compatible chat endpoint first. If that
//! succeeds, the prompt is routed to the Conway tool, which recognises
//! two queries and answers them from the word endpoint (or an in-process
//! engine).
//!
//! # Modules
//!
//! - [`config`] -- Environment and interactive startup configuration.
//! - [`llm`] -- Chat completions client.
//! - [`conway`] -- Remote or local simulation source.
//! - [`tool`] -- Prompt routing and reply text.
//! - [`words`] -- Random benchmark words.
//! - [`session`] -- LLM-then-tool prompt handling.
//! - [`repl`] -- The interactive loop.
//! - [`error`] -- CLI errors.

pub mod config;
pub mod conway;
pub mod error;
pub mod llm;
pub mod repl;
pub mod session;
pub mod tool;
pub mod words;

// Re-export primary types at crate root.
pub use config::CliConfig;
pub use conway::ConwayClient;
pub use error::CliError;
pub use llm::ChatClient;
pub use session::Session;
pub use tool::ConwayTool;

//! Conversational CLI entry point.
//!
//! Asks for endpoint settings, then reads prompts until `exit`. Logs go
//! to stderr so they never interleave with replies on stdout.

use std::path::PathBuf;

use cgol_cli::{ChatClient, CliConfig, ConwayClient, ConwayTool, Session, repl};
use cgol_engine::{Engine, ServiceConfig};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Config file used for local runs when `CGOL_CONFIG` is unset.
const DEFAULT_CONFIG_PATH: &str = "cgol-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid or stdin/stdout fail.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let mut input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    let config = CliConfig::from_env()?
        .prompt_interactively(&mut input, &mut output)
        .await?;
    info!(?config, "configuration loaded");

    let conway = if config.local_engine {
        let path = std::env::var_os("CGOL_CONFIG")
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
        let service = ServiceConfig::load_or_default(&path)?;
        ConwayClient::local(Engine::new(service.engine)?)
    } else {
        ConwayClient::remote(config.conway_api_url.clone())
    };
    info!(source = conway.name(), "simulation source ready");

    let session = Session::new(ChatClient::new(&config), ConwayTool::new(conway)?);
    repl::run(&session, &mut input, &mut output).await?;

    Ok(())
}

//! Configuration for the conversational CLI.
//!
//! Values come from the environment first, then from interactive prompts
//! at startup. An empty answer keeps whatever the environment (or the
//! built-in default) supplied.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::CliError;

/// Word endpoint used when nothing else is configured.
pub const DEFAULT_CONWAY_API_URL: &str = "http://127.0.0.1:8000/cgol";

/// Content-Type sent to the LLM when nothing else is configured.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Chat model used when `LLM_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Example shown when no LLM URL is configured.
const LLM_URL_EXAMPLE: &str = "https://api.yourprovider.com/v1/chat/completions";

/// Complete CLI configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Full URL of the word endpoint (`POST {"word": ...}`).
    pub conway_api_url: String,
    /// Full chat completions URL (not a base URL).
    pub llm_api_url: String,
    /// Bearer token for the LLM.
    pub llm_api_key: String,
    /// Content-Type header sent with LLM requests.
    pub content_type: String,
    /// Chat model identifier.
    pub model: String,
    /// Run simulations in-process instead of calling the word endpoint.
    pub local_engine: bool,
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("conway_api_url", &self.conway_api_url)
            .field("llm_api_url", &self.llm_api_url)
            .field("llm_api_key", &"<redacted>")
            .field("content_type", &self.content_type)
            .field("model", &self.model)
            .field("local_engine", &self.local_engine)
            .finish()
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            conway_api_url: DEFAULT_CONWAY_API_URL.to_owned(),
            llm_api_url: String::new(),
            llm_api_key: String::new(),
            content_type: DEFAULT_CONTENT_TYPE.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            local_engine: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CGOL_API_URL` -- word endpoint URL (default `http://127.0.0.1:8000/cgol`)
    /// - `LLM_API_URL` -- chat completions URL
    /// - `LLM_API_KEY` -- bearer token
    /// - `LLM_CONTENT_TYPE` -- Content-Type header (default `application/json`)
    /// - `LLM_MODEL` -- model name (default `gpt-4o-mini`)
    /// - `CGOL_LOCAL_ENGINE` -- `true` to simulate in-process (default `false`)
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let local_engine = match non_empty("CGOL_LOCAL_ENGINE") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| CliError::Config(format!("invalid CGOL_LOCAL_ENGINE: {e}")))?,
            None => defaults.local_engine,
        };

        Ok(Self {
            conway_api_url: non_empty("CGOL_API_URL").unwrap_or(defaults.conway_api_url),
            llm_api_url: non_empty("LLM_API_URL").unwrap_or(defaults.llm_api_url),
            llm_api_key: non_empty("LLM_API_KEY").unwrap_or(defaults.llm_api_key),
            content_type: non_empty("LLM_CONTENT_TYPE").unwrap_or(defaults.content_type),
            model: non_empty("LLM_MODEL").unwrap_or(defaults.model),
            local_engine,
        })
    }

    /// Ask for each endpoint setting, keeping the current value on an empty answer.
    ///
    /// The word endpoint URL is skipped when running the engine locally.
    pub async fn prompt_interactively<R, W>(
        mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Self, CliError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output
            .write_all(b"Configure your Conway API URL and GPT access:\n")
            .await?;

        if !self.local_engine {
            self.conway_api_url = Question::new("Enter Conway API URL", &self.conway_api_url)
                .ask(input, output)
                .await?;
        }
        self.llm_api_url = Question::new("Enter API URL", &self.llm_api_url)
            .with_example(LLM_URL_EXAMPLE)
            .ask(input, output)
            .await?;
        self.llm_api_key = Question::new("Enter GPT API key", &self.llm_api_key)
            .secret()
            .ask(input, output)
            .await?;
        self.content_type = Question::new("Enter Content-Type", &self.content_type)
            .ask(input, output)
            .await?;

        Ok(self)
    }
}

/// One startup prompt.
struct Question<'a> {
    label: &'a str,
    current: &'a str,
    example: Option<&'a str>,
    secret: bool,
}

impl<'a> Question<'a> {
    const fn new(label: &'a str, current: &'a str) -> Self {
        Self {
            label,
            current,
            example: None,
            secret: false,
        }
    }

    const fn with_example(mut self, example: &'a str) -> Self {
        self.example = Some(example);
        self
    }

    const fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// The prompt line, never echoing a secret value.
    fn render(&self) -> String {
        let label = self.label;
        match (self.current.is_empty(), self.secret, self.example) {
            (false, false, _) => format!("{label} (default {}): ", self.current),
            (false, true, _) => format!("{label} (press Enter to keep the current key): "),
            (true, _, Some(example)) => format!("{label} (e.g. {example}): "),
            (true, _, None) => format!("{label}: "),
        }
    }

    async fn ask<R, W>(&self, input: &mut R, output: &mut W) -> Result<String, CliError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        output.write_all(self.render().as_bytes()).await?;
        output.flush().await?;

        let mut answer = String::new();
        input.read_line(&mut answer).await?;
        let answer = answer.trim();

        if answer.is_empty() {
            Ok(self.current.to_owned())
        } else {
            Ok(answer.to_owned())
        }
    }
}

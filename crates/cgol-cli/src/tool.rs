//! Prompt routing and reply text for the two supported queries.
//!
//! Routing is a case-insensitive substring match on the user's prompt:
//!
//! - `how many generations will the word '<w>'` simulates one word.
//! - `generate 3 random words` simulates three random six-letter words and
//!   names the highest scorer.
//!
//! Anything else is answered with a fixed "not recognized" text. Endpoint
//! failures become reply text too, so a bad call never ends the session.

use cgol_types::SimulationResult;
use rand::Rng;
use regex::Regex;
use tracing::{info, warn};

use crate::conway::ConwayClient;
use crate::error::CliError;
use crate::words;

/// Trigger phrase for the single-word query (matched lowercase).
pub const GENERATIONS_QUERY: &str = "how many generations will the word";

/// Trigger phrase for the random-word comparison (matched lowercase).
pub const RANDOM_WORDS_QUERY: &str = "generate 3 random words";

/// Reply when the single-word query has no quoted word.
pub const MISSING_WORD_REPLY: &str = "Sorry, I couldn't find the word in your prompt.";

/// Reply for prompts matching neither query.
pub const UNRECOGNIZED_REPLY: &str =
    "Prompt not recognized. Please use one of the supported queries.";

/// Number of words drawn for the comparison query.
const RANDOM_WORD_COUNT: usize = 3;

/// `word` followed by a word in straight or curly quotes.
const WORD_PATTERN: &str = r#"(?i)word [‘'"“](\w+)[’'"”]"#;

/// What a prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Simulate one quoted word.
    Generations(String),
    /// The single-word query without a quoted word.
    MissingWord,
    /// Compare three random words.
    RandomWords,
    /// Neither query.
    Unrecognized,
}

/// Routes prompts and renders replies from simulation results.
pub struct ConwayTool {
    conway: ConwayClient,
    word_pattern: Regex,
}

impl ConwayTool {
    /// Create a tool backed by `conway`.
    pub fn new(conway: ConwayClient) -> Result<Self, CliError> {
        Ok(Self {
            conway,
            word_pattern: Regex::new(WORD_PATTERN)?,
        })
    }

    /// Decide which query `prompt` is.
    pub fn classify(&self, prompt: &str) -> Query {
        let lower = prompt.to_lowercase();

        if lower.contains(GENERATIONS_QUERY) {
            return self
                .word_pattern
                .captures(prompt)
                .and_then(|caps| caps.get(1))
                .map_or(Query::MissingWord, |m| {
                    Query::Generations(m.as_str().to_owned())
                });
        }
        if lower.contains(RANDOM_WORDS_QUERY) {
            return Query::RandomWords;
        }
        Query::Unrecognized
    }

    /// Answer `prompt`, drawing random words from `rng` when asked to.
    pub async fn respond(&self, prompt: &str, rng: &mut impl Rng) -> String {
        match self.classify(prompt) {
            Query::Generations(word) => self.describe_word(&word).await,
            Query::MissingWord => MISSING_WORD_REPLY.to_owned(),
            Query::RandomWords => {
                let words = words::random_words(rng, RANDOM_WORD_COUNT);
                self.compare_words(words).await
            }
            Query::Unrecognized => UNRECOGNIZED_REPLY.to_owned(),
        }
    }

    async fn describe_word(&self, word: &str) -> String {
        match self.conway.simulate(word).await {
            Ok(result) => {
                info!(
                    word,
                    generations = result.generations,
                    score = result.score,
                    source = self.conway.name(),
                    "word simulated"
                );
                format!(
                    "The word '{word}' results in {} generations and a score of {}.",
                    result.generations, result.score
                )
            }
            Err(e) => conway_failure(&e),
        }
    }

    async fn compare_words(&self, words: Vec<String>) -> String {
        let mut results = Vec::with_capacity(words.len());
        for word in words {
            match self.conway.simulate(&word).await {
                Ok(result) => results.push((word, result)),
                Err(e) => return conway_failure(&e),
            }
        }
        format_comparison(&results)
    }
}

fn conway_failure(error: &CliError) -> String {
    warn!(error = %error, "word endpoint call failed");
    format!("Error calling Conway API: {error}")
}

/// Render the comparison reply for already-simulated words.
pub fn format_comparison(results: &[(String, SimulationResult)]) -> String {
    let listed = results
        .iter()
        .map(|(word, result)| {
            format!(
                "'{word}' (gens: {}, score: {})",
                result.generations, result.score
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut reply = format!("Generated 3 random words and their results: {listed}.");
    if let Some((word, result)) = highest(results) {
        reply.push_str(&format!(
            " The highest Conway score is for '{word}' with a score of {}.",
            result.score
        ));
    }
    reply
}

/// The highest-scoring entry; ties go to the earliest.
pub fn highest(results: &[(String, SimulationResult)]) -> Option<&(String, SimulationResult)> {
    results.iter().fold(None, |best, entry| match best {
        Some(current) if current.1.score >= entry.1.score => Some(current),
        _ => Some(entry),
    })
}

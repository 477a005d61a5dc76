//! One conversational session: LLM call, then the Conway tool.

use tracing::{info, warn};

use crate::llm::ChatClient;
use crate::tool::ConwayTool;

/// Everything needed to answer prompts.
pub struct Session {
    chat: ChatClient,
    tool: ConwayTool,
}

impl Session {
    /// Create a session from its two clients.
    pub const fn new(chat: ChatClient, tool: ConwayTool) -> Self {
        Self { chat, tool }
    }

    /// Answer one prompt.
    ///
    /// The LLM is always called first. If it fails, the reply is the LLM
    /// error and the word endpoint is never contacted. Otherwise the LLM
    /// text is logged and the reply comes from the Conway tool.
    pub async fn handle_prompt(&self, prompt: &str) -> String {
        match self.chat.complete(prompt).await {
            Ok(reply) => {
                info!(model = self.chat.model(), reply = %reply, "LLM replied");
            }
            Err(e) => {
                warn!(error = %e, "LLM call failed");
                return format!("Error calling GPT API: {e}");
            }
        }

        let mut rng = rand::rng();
        self.tool.respond(prompt, &mut rng).await
    }
}

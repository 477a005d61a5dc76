//! Chat completions client.
//!
//! Sends the user's prompt, unmodified, as a single user message to an
//! OpenAI-compatible chat completions endpoint and extracts the reply
//! text. The reply is only logged; routing is decided from the prompt.

use crate::config::CliConfig;
use crate::error::CliError;

/// Sampling temperature sent with every request.
const TEMPERATURE: f64 = 0.7;

/// Client for an OpenAI-compatible chat completions API.
///
/// `api_url` is the full endpoint URL, including `/chat/completions`.
pub struct ChatClient {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    content_type: String,
    model: String,
}

impl ChatClient {
    /// Create a client from CLI configuration.
    pub fn new(config: &CliConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.llm_api_url.clone(),
            api_key: config.llm_api_key.clone(),
            content_type: config.content_type.clone(),
            model: config.model.clone(),
        }
    }

    /// Model identifier used for requests.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` and return the reply text.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Llm`] if the HTTP call fails, the endpoint
    /// answers with a non-success status, or the body has no reply text.
    pub async fn complete(&self, prompt: &str) -> Result<String, CliError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "user", "content": prompt}
            ],
            "temperature": TEMPERATURE
        });

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", &self.content_type)
            .json(&body)
            .send()
            .await
            .map_err(|e| CliError::Llm(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(CliError::Llm(format!("returned {status}: {error_body}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CliError::Llm(format!("response parse failed: {e}")))?;

        extract_reply(&json)
    }
}

/// Extract `choices[0].message.content` from a chat completions response.
fn extract_reply(json: &serde_json::Value) -> Result<String, CliError> {
    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| CliError::Llm("response missing choices[0].message.content".to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_reply_valid() {
        let json = serde_json::json!({
            "choices": [{
                "message": {"role": "assistant", "content": "Let me check that word."}
            }]
        });
        assert!(extract_reply(&json).is_ok_and(|text| text == "Let me check that word."));
    }

    #[test]
    fn extract_reply_missing_choices() {
        let json = serde_json::json!({"error": {"message": "bad key"}});
        assert!(matches!(extract_reply(&json), Err(CliError::Llm(_))));
    }

    #[test]
    fn extract_reply_empty_choices() {
        let json = serde_json::json!({"choices": []});
        assert!(extract_reply(&json).is_err());
    }

    #[test]
    fn extract_reply_non_string_content() {
        let json = serde_json::json!({"choices": [{"message": {"content": null}}]});
        assert!(extract_reply(&json).is_err());
    }

    #[test]
    fn client_uses_configured_model() {
        let config = CliConfig {
            model: "gpt-4o".to_owned(),
            ..CliConfig::default()
        };
        assert_eq!(ChatClient::new(&config).model(), "gpt-4o");
    }
}

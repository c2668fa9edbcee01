//! REST client for the Gemini generateContent endpoint.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::chunk::split_chunks;
use super::config::GeminiConfig;
use super::prompts::{CHUNK_INSTRUCTION, COMBINE_INSTRUCTION};
use super::NOT_CONFIGURED_MESSAGE;

/// Maximum characters per slice in the chunked path.
pub const MAX_CHUNK_CHARS: usize = 4000;

/// Inputs longer than this are routed through the chunked path.
pub const CHUNK_THRESHOLD_CHARS: usize = 4000;

/// Client for Gemini text generation.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

/// generateContent request format.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// generateContent response format.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, empty when absent.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.clone())
            .unwrap_or_default()
    }
}

/// Errors that can occur during Gemini calls.
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("API key not configured")]
    NotConfigured,
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GeminiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Get the config.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Whether a usable credential is present.
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// One generateContent call. Returns the model's text.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(GeminiError::NotConfigured)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );
        debug!("Calling {} ({} prompt chars)", self.config.model, prompt.chars().count());

        let resp = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::Connection(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api(format!("HTTP {}: {}", status, body)));
        }

        let parsed: GenerateContentResponse = resp
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        Ok(parsed.text())
    }

    /// Single-call responder. Misconfiguration and call failures become
    /// fixed user-visible strings, never errors.
    pub async fn respond(&self, prompt: &str, context: &str) -> String {
        if !self.is_configured() {
            return NOT_CONFIGURED_MESSAGE.to_string();
        }
        let full_prompt = join_context(context, prompt);
        match self.generate(&full_prompt).await {
            Ok(text) => text,
            Err(e) => format!("Error generating response: {}", e),
        }
    }

    /// Chunked responder for oversized input.
    ///
    /// Slices the combined context + prompt into `max_chunk_chars`-character
    /// pieces, requests a bounded summary per slice, then a final combining
    /// pass over the partial summaries. Any failure collapses to an error
    /// string; no partial results are surfaced.
    pub async fn respond_chunked(
        &self,
        prompt: &str,
        max_chunk_chars: usize,
        context: &str,
    ) -> String {
        if !self.is_configured() {
            return NOT_CONFIGURED_MESSAGE.to_string();
        }

        let text = join_context(context, prompt);
        let chunks = split_chunks(&text, max_chunk_chars);
        let total = chunks.len();
        debug!("Chunked response: {} slices of <= {} chars", total, max_chunk_chars);

        let mut partials = Vec::with_capacity(total);
        for (idx, chunk) in chunks.iter().enumerate() {
            let part_prompt = format!(
                "{}\n\nPart {}/{}:\n\n{}",
                CHUNK_INSTRUCTION,
                idx + 1,
                total,
                chunk
            );
            match self.generate(&part_prompt).await {
                Ok(summary) => partials.push(summary),
                Err(e) => return format!("Error generating response: {}", e),
            }
        }

        let final_prompt = format!(
            "{}\n\nPart summaries:\n\n{}",
            COMBINE_INSTRUCTION,
            partials.join("\n\n")
        );
        match self.generate(&final_prompt).await {
            Ok(text) => text,
            Err(e) => format!("Error generating response: {}", e),
        }
    }

    /// Route a prompt through the direct or chunked path depending on how
    /// large the underlying input is.
    pub async fn respond_auto(&self, prompt: &str, input_chars: usize) -> String {
        if input_chars > CHUNK_THRESHOLD_CHARS {
            self.respond_chunked(prompt, MAX_CHUNK_CHARS, "").await
        } else {
            self.respond(prompt, "").await
        }
    }
}

fn join_context(context: &str, prompt: &str) -> String {
    if context.is_empty() {
        prompt.to_string()
    } else {
        format!("{}\n\n{}", context, prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn test_config(endpoint: &str, key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_key: key.map(|k| k.to_string()),
            endpoint: endpoint.to_string(),
            model: "gemini-2.0-flash".to_string(),
            timeout_secs: 5,
        }
    }

    fn text_response(text: &str) -> String {
        serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": text}]}}]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(text_response("Generated text"))
            .create_async()
            .await;

        let client = GeminiClient::new(test_config(&server.url(), Some("test-key")));
        let text = client.generate("Hello").await.unwrap();
        assert_eq!(text, "Generated text");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_respond_without_key_returns_fixed_message() {
        let client = GeminiClient::new(test_config("http://127.0.0.1:1", None));
        let text = client.respond("Hello", "").await;
        assert_eq!(text, NOT_CONFIGURED_MESSAGE);
    }

    #[tokio::test]
    async fn test_respond_converts_errors_to_string() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = GeminiClient::new(test_config(&server.url(), Some("test-key")));
        let text = client.respond("Hello", "").await;
        assert!(text.starts_with("Error generating response:"));
    }

    #[tokio::test]
    async fn test_chunked_issues_one_call_per_slice_plus_combine() {
        let mut server = Server::new_async().await;
        // 9001 chars at 4000/slice => 3 slice calls + 1 combine call.
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(text_response("partial"))
            .expect(4)
            .create_async()
            .await;

        let client = GeminiClient::new(test_config(&server.url(), Some("test-key")));
        let input = "x".repeat(9001);
        let text = client.respond_chunked(&input, MAX_CHUNK_CHARS, "").await;
        assert_eq!(text, "partial");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_respond_auto_uses_single_call_for_small_input() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.0-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(text_response("short answer"))
            .expect(1)
            .create_async()
            .await;

        let client = GeminiClient::new(test_config(&server.url(), Some("test-key")));
        let text = client.respond_auto("Summarize this", 100).await;
        assert_eq!(text, "short answer");
        mock.assert_async().await;
    }
}

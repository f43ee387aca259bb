//! HTTP client for the structured-extraction model.
//!
//! Every model call in the service goes through `LlmClient`; no other module
//! talks to the Anthropic API.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// Pinned so extraction output stays comparable across deployments.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;
/// Low temperature keeps field extraction repeatable.
const TEMPERATURE: f32 = 0.2;
const MAX_ATTEMPTS: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model output is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("gave up after {attempts} attempts")]
    Exhausted { attempts: u32 },

    #[error("model returned no text content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Text of the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }

    /// Sends one user prompt. 429 and 5xx responses and transport failures
    /// are retried with exponential backoff; other errors return immediately.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let body = MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            system,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if let Some(delay) = backoff(attempt) {
                warn!(
                    "LLM attempt {attempt} failed, retrying in {}ms",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if is_retryable(status) {
                let text = response.text().await.unwrap_or_default();
                warn!("LLM API returned {status}: {text}");
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: text,
                });
                continue;
            }

            if !status.is_success() {
                let text = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorEnvelope>(&text)
                    .map(|e| e.error.message)
                    .unwrap_or(text);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: LlmResponse = response.json().await?;
            debug!(
                "LLM call ok: input_tokens={}, output_tokens={}",
                parsed.usage.input_tokens, parsed.usage.output_tokens
            );
            return Ok(parsed);
        }

        Err(last_error.unwrap_or(LlmError::Exhausted {
            attempts: MAX_ATTEMPTS,
        }))
    }

    /// Calls the model and parses its text reply as JSON. Markdown fences
    /// around the payload are tolerated.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(serde_json::from_str(strip_json_fences(text))?)
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// 1s, 2s, 4s ... before each retry; nothing before the first attempt.
fn backoff(attempt: u32) -> Option<Duration> {
    (attempt > 0).then(|| Duration::from_millis(1000 << (attempt - 1)))
}

/// Strips ```json ... ``` or ``` ... ``` fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let inner = inner.trim_start();
    inner
        .strip_suffix("```")
        .map(str::trim)
        .unwrap_or(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"name\": \"Asha\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"name\": \"Asha\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"name\": \"Asha\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"name\": \"Asha\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"name\": \"Asha\"}\n";
        assert_eq!(strip_json_fences(input), "{\"name\": \"Asha\"}");
    }

    #[test]
    fn test_strip_json_fences_unterminated() {
        let input = "```json\n{\"name\": \"Asha\"}";
        assert_eq!(strip_json_fences(input), "{\"name\": \"Asha\"}");
    }

    #[test]
    fn test_backoff_schedule() {
        assert_eq!(backoff(0), None);
        assert_eq!(backoff(1), Some(Duration::from_secs(1)));
        assert_eq!(backoff(2), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(is_retryable(StatusCode::BAD_GATEWAY));
        assert!(!is_retryable(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn test_response_text_picks_first_text_block() {
        let response: LlmResponse = serde_json::from_value(serde_json::json!({
            "content": [
                {"type": "tool_use", "text": null},
                {"type": "text", "text": "{}"}
            ],
            "usage": {"input_tokens": 10, "output_tokens": 2}
        }))
        .unwrap();
        assert_eq!(response.text(), Some("{}"));
    }
}

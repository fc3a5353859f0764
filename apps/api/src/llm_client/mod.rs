//! LLM Client: the single point of entry for all Gemini API calls.
//!
//! No other module may call the Generative Language API directly.
//!
//! Model: gemini-2.5-flash-preview-09-2025 (hardcoded, not configurable)

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all LLM calls.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash-preview-09-2025";
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Prompt blocked: {reason}")]
    Blocked { reason: String },

    #[error("No candidates returned from API.")]
    NoCandidates,

    #[error("LLM returned empty content")]
    EmptyContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
    system_instruction: Content<'a>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

impl<'a> Content<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            parts: [Part { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    ///
    /// Without candidates, a prompt feedback block means the prompt was
    /// refused; no feedback at all means the API returned nothing usable.
    pub fn text(&self) -> Result<&str, LlmError> {
        if let Some(candidate) = self.candidates.first() {
            return candidate
                .content
                .as_ref()
                .and_then(|content| content.parts.first())
                .and_then(|part| part.text.as_deref())
                .ok_or(LlmError::EmptyContent);
        }

        match &self.prompt_feedback {
            Some(feedback) => Err(LlmError::Blocked {
                reason: feedback
                    .block_reason
                    .clone()
                    .unwrap_or_else(|| "unspecified".to_string()),
            }),
            None => Err(LlmError::NoCandidates),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the `generateContent` endpoint with retry logic and structured
/// output helpers.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }

    /// Makes a raw `generateContent` call constrained to JSON output matching `schema`.
    /// Retries on transport errors, 429 and 5xx with exponential backoff.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        schema: &Value,
    ) -> Result<GenerateContentResponse, LlmError> {
        let request_body = GenerateContentRequest {
            contents: [Content::text(prompt)],
            system_instruction: Content::text(system),
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };
        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Gemini API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<GeminiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: GenerateContentResponse = response.json().await?;

            if let Some(usage) = &llm_response.usage_metadata {
                debug!(
                    "LLM call succeeded: prompt_tokens={}, candidate_tokens={}, finish_reason={:?}",
                    usage.prompt_token_count,
                    usage.candidates_token_count,
                    llm_response
                        .candidates
                        .first()
                        .and_then(|c| c.finish_reason.as_deref())
                );
            }

            return Ok(llm_response);
        }

        Err(retries_exhausted(last_error))
    }

    /// Calls the model and deserializes the first candidate's text as JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        schema: &Value,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system, schema).await?;
        parse_json_text(&response)
    }
}

/// Error reported once every attempt failed. A final 429 means the quota, not
/// the request, is the problem.
fn retries_exhausted(last_error: Option<LlmError>) -> LlmError {
    match last_error {
        Some(LlmError::Api { status: 429, .. }) | None => LlmError::RateLimited {
            retries: MAX_RETRIES,
        },
        Some(e) => e,
    }
}

fn parse_json_text<T: DeserializeOwned>(response: &GenerateContentResponse) -> Result<T, LlmError> {
    let text = response.text()?;

    // JSON mode output is normally bare, but fenced output still turns up
    let text = strip_json_fences(text);

    serde_json::from_str(text).map_err(LlmError::Parse)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let stripped = stripped.trim_start();
    stripped
        .strip_suffix("```")
        .map(str::trim)
        .unwrap_or(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_request_uses_gemini_field_names() {
        let schema = json!({"type": "OBJECT"});
        let request = GenerateContentRequest {
            contents: [Content::text("user query")],
            system_instruction: Content::text("system"),
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &schema,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "user query");
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "system");
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_text_from_first_candidate() {
        let r = response(json!({
            "candidates": [{"content": {"parts": [{"text": "{\"title\": \"x\"}"}]}, "finishReason": "STOP"}],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5}
        }));
        assert_eq!(r.text().unwrap(), "{\"title\": \"x\"}");
        let parsed: Value = parse_json_text(&r).unwrap();
        assert_eq!(parsed["title"], "x");
    }

    #[test]
    fn test_blocked_prompt() {
        let r = response(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
        match r.text() {
            Err(LlmError::Blocked { reason }) => assert_eq!(reason, "SAFETY"),
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn test_no_candidates_without_feedback() {
        let r = response(json!({}));
        assert!(matches!(r.text(), Err(LlmError::NoCandidates)));
    }

    #[test]
    fn test_candidate_without_parts_is_empty_content() {
        let r = response(json!({"candidates": [{"finishReason": "MAX_TOKENS"}]}));
        assert!(matches!(r.text(), Err(LlmError::EmptyContent)));
    }

    #[test]
    fn test_final_429_reports_rate_limited() {
        let error = retries_exhausted(Some(LlmError::Api {
            status: 429,
            message: "quota".into(),
        }));
        assert!(matches!(error, LlmError::RateLimited { retries: MAX_RETRIES }));
    }

    #[test]
    fn test_final_server_error_is_kept() {
        let error = retries_exhausted(Some(LlmError::Api {
            status: 503,
            message: "unavailable".into(),
        }));
        assert!(matches!(error, LlmError::Api { status: 503, .. }));
    }

    #[test]
    fn test_invalid_json_text_is_parse_error() {
        let r = response(json!({
            "candidates": [{"content": {"parts": [{"text": "not json"}]}}]
        }));
        let result: Result<Value, _> = parse_json_text(&r);
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }
}

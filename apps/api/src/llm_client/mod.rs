//! Generative-text client, the single point of entry for every call to the
//! hosted text-generation API.
//!
//! No other module talks to the provider directly. Features depend on the
//! `TextGenerator` trait so they can run against a stub in tests, or against
//! `DisabledGenerator` when no API key is configured.
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-pro";
const REQUEST_TIMEOUT_SECS: u64 = 120;
const MAX_RETRIES: u32 = 3;

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

    #[error("Model returned empty content")]
    EmptyContent,

    #[error("No JSON {0} found in model output")]
    NoJson(&'static str),

    #[error("Text generation is disabled (no API key configured)")]
    Disabled,
}

/// Anything that turns a prompt into free text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Backend name, for logs and for callers that report which path answered.
    fn name(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate, or `""` when the model
    /// returned nothing usable.
    pub fn text(&self) -> &str {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .unwrap_or("")
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

// ────────────────────────────────────────────────────────────────────────────
// GeminiClient
// ────────────────────────────────────────────────────────────────────────────

/// Wraps the `generateContent` endpoint with retry on 429/5xx.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/{}:generateContent", self.model)
    }

    /// Makes a raw call, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(&self, prompt: &str) -> Result<GenerateResponse, LlmError> {
        let request_body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };
        let url = self.endpoint();

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Generation attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
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
                warn!("Generation API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: GenerateResponse = response.json().await?;
            debug!(
                "Generation call succeeded: candidates={}",
                parsed.candidates.len()
            );
            return Ok(parsed);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.call(prompt).await?;
        Ok(response.text().to_string())
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

/// Stand-in used when no API key is configured. Every call fails, so every
/// feature takes its fallback path.
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Disabled)
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JSON extraction from free text
// ────────────────────────────────────────────────────────────────────────────

/// Greedy span from the first `{` to the last `}`. Surrounding prose and
/// markdown fences fall outside the span.
pub fn extract_json_object(text: &str) -> Option<&str> {
    extract_span(text, '{', '}')
}

/// Greedy span from the first `[` to the last `]`.
pub fn extract_json_array(text: &str) -> Option<&str> {
    extract_span(text, '[', ']')
}

fn extract_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Generates text and deserializes the embedded JSON object.
pub async fn generate_json_object<T: DeserializeOwned>(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<T, LlmError> {
    let text = generator.generate(prompt).await?;
    if text.trim().is_empty() {
        return Err(LlmError::EmptyContent);
    }
    let json = extract_json_object(&text).ok_or(LlmError::NoJson("object"))?;
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
pub mod testing {
    //! Scripted generators for unit tests.

    use std::sync::Mutex;

    use super::*;

    /// Returns the same canned reply for every prompt and records the prompts.
    pub struct CannedGenerator {
        reply: String,
        pub prompts: Mutex<Vec<String>>,
    }

    impl CannedGenerator {
        pub fn new(reply: impl Into<String>) -> Self {
            Self {
                reply: reply.into(),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn last_prompt(&self) -> String {
            self.prompts
                .lock()
                .unwrap()
                .last()
                .cloned()
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }

        fn name(&self) -> &'static str {
            "canned"
        }
    }

    /// Fails every call with an API error.
    pub struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{CannedGenerator, FailingGenerator};
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        key: String,
    }

    #[test]
    fn test_extract_object_from_fenced_output() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json_object(input), Some("{\"key\": \"value\"}"));
    }

    #[test]
    fn test_extract_object_is_greedy() {
        let input = "Here you go: {\"a\": {\"b\": 1}} and {\"c\": 2} done";
        assert_eq!(
            extract_json_object(input),
            Some("{\"a\": {\"b\": 1}} and {\"c\": 2}")
        );
    }

    #[test]
    fn test_extract_object_missing() {
        assert_eq!(extract_json_object("no json here"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
    }

    #[test]
    fn test_extract_array() {
        let input = "Questions:\n[{\"question\": \"Why?\"}]\nThanks";
        assert_eq!(extract_json_array(input), Some("[{\"question\": \"Why?\"}]"));
        assert_eq!(extract_json_array("{}"), None);
    }

    #[test]
    fn test_response_text_reads_first_part() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "hello"}, {"text": "ignored"}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), "hello");
    }

    #[test]
    fn test_response_text_empty_when_no_candidates() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hi" }],
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn test_endpoint_includes_model() {
        let client = GeminiClient::new("k".to_string(), "gemini-pro".to_string()).unwrap();
        assert!(client.endpoint().ends_with("/models/gemini-pro:generateContent"));
    }

    #[tokio::test]
    async fn test_generate_json_object_parses_embedded_json() {
        let generator = CannedGenerator::new("Sure!\n{\"key\": \"value\"}\nAnything else?");
        let probe: Probe = generate_json_object(&generator, "prompt").await.unwrap();
        assert_eq!(probe.key, "value");
    }

    #[tokio::test]
    async fn test_generate_json_object_reports_missing_json() {
        let generator = CannedGenerator::new("I cannot help with that.");
        let err = generate_json_object::<Probe>(&generator, "prompt")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::NoJson("object")));
    }

    #[tokio::test]
    async fn test_generate_json_object_reports_empty_output() {
        let generator = CannedGenerator::new("   ");
        let err = generate_json_object::<Probe>(&generator, "prompt")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_generate_json_object_propagates_transport_error() {
        let err = generate_json_object::<Probe>(&FailingGenerator, "prompt")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_disabled_generator_always_fails() {
        let err = DisabledGenerator.generate("anything").await.unwrap_err();
        assert!(matches!(err, LlmError::Disabled));
    }
}

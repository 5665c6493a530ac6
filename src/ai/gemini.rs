use std::fmt;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::{Config, REDACTED};
use crate::http::client::send_json;
use crate::http::method::HttpMethod;
use crate::http::request::JsonRequest;

use super::{GenerationError, TextGenerator};

const API_KEY_HEADER: &str = "x-goog-api-key";

// ─── Response Types ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Client for the Google Generative Language `generateContent` API.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    api_base_url: String,
    timeout_ms: Option<u64>,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base_url: config.api_base_url.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn build_request(&self, api_key: &str, prompt: &str) -> JsonRequest {
        JsonRequest {
            method: HttpMethod::Post,
            url: self.endpoint_url(),
            headers: vec![(API_KEY_HEADER.to_string(), api_key.to_string())],
            body: json!({ "contents": [{ "parts": [{ "text": prompt }] }] }),
            timeout_ms: self.timeout_ms,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(GenerationError::MissingApiKey)?;

        let request = self.build_request(api_key, prompt);
        let response = send_json(request).await?;
        tracing::debug!(
            model = %self.model,
            status = response.status,
            duration_ms = %response.duration_ms,
            "generation API responded"
        );

        if !response.is_success() {
            return Err(GenerationError::Status {
                status: response.status,
                body: response.body,
            });
        }

        parse_response_text(&response.body)
    }
}

/// Concatenate the text parts of the first candidate.
fn parse_response_text(body: &str) -> Result<String, GenerationError> {
    let parsed: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(text)
}

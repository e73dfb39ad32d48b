// src/services/gemini.rs
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1/models/gemini-1.5-pro:generateContent";

/// Outbound request timeout. There is no retry; a slow provider surfaces as
/// an upstream failure and the user gets the canned apology.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request to generation provider failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("generation provider responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("generation provider returned no extractable candidate text")]
    MalformedResponse,
}

/// One-shot text generation: full prompt in, reply text out. The relay
/// depends on nothing else the provider offers.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, GEMINI_API_URL)
    }

    /// Same client against a different URL, for tests.
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig::default(),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data: GenerateResponse = response.json().await?;
        data.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(ProviderError::MalformedResponse)
    }
}

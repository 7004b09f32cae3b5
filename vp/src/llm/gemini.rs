//! Gemini API client implementation
//!
//! Implements the LlmClient trait for Google's generateContent API, covering
//! both text-only completion and audio transcription via inline data.

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use reqwest::Client;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use super::{LlmClient, LlmError};
use crate::config::LlmConfig;
use crate::prompts::{PromptLoader, embedded};

/// Key looked up in the secrets file
const SECRETS_KEY: &str = "gemini-api-key";

/// Gemini API client
///
/// The credential is deliberately not resolved at construction: some flows
/// never call the gateway, so resolution happens lazily on first use and is
/// cached for the life of the client.
pub struct GeminiClient {
    model: String,
    base_url: String,
    http: Client,
    api_key_env: String,
    secrets_file: Option<PathBuf>,
    max_output_tokens: u32,
    transcribe_prompt: String,
    api_key: OnceCell<String>,
}

impl GeminiClient {
    /// Create a new client from configuration
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, "from_config: called");
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        let transcribe_prompt = PromptLoader::new().load("transcribe").unwrap_or_else(|e| {
            warn!(error = %e, "from_config: falling back to embedded transcription prompt");
            embedded::TRANSCRIBE.to_string()
        });

        Ok(Self {
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            http,
            api_key_env: config.api_key_env.clone(),
            secrets_file: config.secrets_path(),
            max_output_tokens: config.max_output_tokens,
            transcribe_prompt,
            api_key: OnceCell::new(),
        })
    }

    /// Resolve the credential once, on first use
    async fn api_key(&self) -> Result<&str, LlmError> {
        self.api_key
            .get_or_try_init(|| async { resolve_api_key(self.secrets_file.as_deref(), &self.api_key_env) })
            .await
            .map(String::as_str)
    }

    /// Build the generateContent request body
    fn build_request_body(&self, prompt: &str, audio: Option<(&[u8], &str)>) -> serde_json::Value {
        debug!(%self.model, has_audio = audio.is_some(), "build_request_body: called");
        let mut parts = vec![serde_json::json!({ "text": prompt })];

        if let Some((bytes, mime_type)) = audio {
            parts.push(serde_json::json!({
                "inline_data": {
                    "mime_type": mime_type,
                    "data": BASE64.encode(bytes),
                }
            }));
        }

        serde_json::json!({
            "contents": [{ "parts": parts }],
            "generationConfig": { "maxOutputTokens": self.max_output_tokens },
        })
    }

    /// Send a generateContent request and extract the response text
    async fn generate(&self, body: serde_json::Value) -> Result<String, LlmError> {
        let api_key = self.api_key().await?;
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status.as_u16() == 429 {
            debug!("generate: quota exhausted (429)");
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs);

            return Err(LlmError::QuotaExceeded { retry_after });
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "generate: API error");
            // Quota exhaustion can also surface as a structured error body.
            if text.contains("RESOURCE_EXHAUSTED") {
                return Err(LlmError::QuotaExceeded { retry_after: None });
            }
            return Err(LlmError::Backend(format!("API error {}: {}", status.as_u16(), text)));
        }

        let api_response: GenerateResponse = response.json().await?;
        let text: String = api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            debug!("generate: empty response text");
            return Err(LlmError::Backend("model returned no text".to_string()));
        }

        debug!(response_len = text.len(), "generate: success");
        Ok(text.to_string())
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        debug!(prompt_len = prompt.len(), "complete: called");
        self.generate(self.build_request_body(prompt, None)).await
    }

    async fn transcribe(&self, audio: &[u8], mime_type: &str) -> Result<String, LlmError> {
        debug!(audio_len = audio.len(), %mime_type, "transcribe: called");
        self.generate(self.build_request_body(&self.transcribe_prompt, Some((audio, mime_type))))
            .await
    }
}

/// Resolve the credential: secrets file first, environment variable second
fn resolve_api_key(secrets_file: Option<&Path>, api_key_env: &str) -> Result<String, LlmError> {
    if let Some(path) = secrets_file
        && path.exists()
        && let Some(key) = read_secrets_file(path)
    {
        debug!(path = %path.display(), "resolve_api_key: using secrets file");
        return Ok(key);
    }

    match std::env::var(api_key_env) {
        Ok(key) if !key.trim().is_empty() => {
            debug!(%api_key_env, "resolve_api_key: using environment variable");
            Ok(key.trim().to_string())
        }
        _ => Err(LlmError::Configuration(format!(
            "no `{}` entry in the secrets file and the {} environment variable is not set",
            SECRETS_KEY, api_key_env
        ))),
    }
}

/// Read the credential out of a YAML secrets file
///
/// Unreadable or malformed files fall through to the environment variable.
fn read_secrets_file(path: &Path) -> Option<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "secrets file unreadable, falling back to environment");
            return None;
        }
    };

    let doc: serde_yaml::Value = match serde_yaml::from_str(&content) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "secrets file malformed, falling back to environment");
            return None;
        }
    };

    doc.get(SECRETS_KEY)
        .and_then(|value| value.as_str())
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(String::from)
}

// Gemini API response types

#[derive(Debug, Deserialize)]
struct GenerateResponse {
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

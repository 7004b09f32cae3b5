//! Model gateway for Voiceplan
//!
//! Wraps the generative-language backend behind two call shapes: transcribe
//! audio to text, and complete a text prompt. Owns credential resolution and
//! raw-failure translation; everything past this module sees only
//! [`LlmError`].

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

mod client;
mod error;
mod gemini;

pub use client::LlmClient;
pub use error::LlmError;
pub use gemini::GeminiClient;

#[cfg(test)]
pub use client::mock::MockLlmClient;

use crate::config::LlmConfig;

/// Create a gateway client based on the provider specified in config
///
/// Currently only "gemini" is supported.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn LlmClient>, LlmError> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "gemini" => Ok(Arc::new(GeminiClient::from_config(config)?)),
        other => Err(LlmError::Configuration(format!(
            "Unknown LLM provider: '{}'. Supported: gemini",
            other
        ))),
    }
}

/// Declared MIME type for an audio upload, from its file extension
///
/// `.m4a` audio travels as `audio/mp4`; unknown extensions default to WAV.
pub fn mime_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("mp3") => "audio/mp3",
        Some(ext) if ext.eq_ignore_ascii_case("m4a") => "audio/mp4",
        _ => "audio/wav",
    }
}

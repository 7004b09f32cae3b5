//! Gateway error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during gateway calls
///
/// Every backend failure classifies into one of these; nothing unrecognized
/// is allowed to escape the gateway unwrapped.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Backend-reported resource exhaustion. User-actionable: wait and retry,
    /// or check plan and billing. Never retried automatically.
    #[error("model quota exceeded; wait and retry, or check your plan and billing")]
    QuotaExceeded { retry_after: Option<Duration> },

    /// Any other backend, network, or response-decoding failure
    #[error("model backend failure: {0}")]
    Backend(String),

    /// No credential could be resolved; fatal for every gateway call until
    /// fixed externally. Raised at first use, not process start.
    #[error("model credential missing: {0}")]
    Configuration(String),
}

impl LlmError {
    /// Check if this is a quota exhaustion error
    pub fn is_quota(&self) -> bool {
        matches!(self, LlmError::QuotaExceeded { .. })
    }

    /// Check if this is a missing-credential error
    pub fn is_configuration(&self) -> bool {
        matches!(self, LlmError::Configuration(_))
    }

    /// Get the backend-suggested wait, if it reported one
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            LlmError::QuotaExceeded { retry_after } => *retry_after,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Backend(e.to_string())
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(e: serde_json::Error) -> Self {
        LlmError::Backend(format!("invalid backend response: {}", e))
    }
}

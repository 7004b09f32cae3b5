//! LlmClient trait definition

use async_trait::async_trait;

use super::LlmError;

/// Stateless gateway to the generative-language backend
///
/// Each call is an independent request/response round trip; no conversation
/// state is kept between calls. The pipeline performs no retries at this
/// seam: failures classify and escalate to the caller.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single text prompt and return the model's trimmed text
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Transcribe audio and return the trimmed transcript
    ///
    /// The fixed transcription instruction (faithful, no summarizing, no
    /// invention) is owned by the implementation, not the caller.
    async fn transcribe(&self, audio: &[u8], mime_type: &str) -> Result<String, LlmError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::debug;

    /// Mock gateway for unit tests
    ///
    /// Returns canned responses in order, shared between `complete` and
    /// `transcribe` calls.
    pub struct MockLlmClient {
        responses: Vec<String>,
        call_count: AtomicUsize,
    }

    impl MockLlmClient {
        pub fn new(responses: Vec<&str>) -> Self {
            Self {
                responses: responses.into_iter().map(String::from).collect(),
                call_count: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.call_count.load(Ordering::SeqCst)
        }

        fn next_response(&self) -> Result<String, LlmError> {
            let idx = self.call_count.fetch_add(1, Ordering::SeqCst);
            debug!(%idx, "MockLlmClient: fetching response");
            self.responses
                .get(idx)
                .cloned()
                .ok_or_else(|| LlmError::Backend("No more mock responses".to_string()))
        }
    }

    #[async_trait]
    impl LlmClient for MockLlmClient {
        async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
            self.next_response()
        }

        async fn transcribe(&self, _audio: &[u8], _mime_type: &str) -> Result<String, LlmError> {
            self.next_response()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_client_returns_responses_in_order() {
            let client = MockLlmClient::new(vec!["first", "second"]);

            assert_eq!(client.complete("p").await.unwrap(), "first");
            assert_eq!(client.complete("p").await.unwrap(), "second");
            assert_eq!(client.call_count(), 2);
        }

        #[tokio::test]
        async fn test_mock_client_errors_when_exhausted() {
            let client = MockLlmClient::new(vec![]);
            assert!(client.complete("p").await.is_err());
        }

        #[tokio::test]
        async fn test_mock_transcribe_shares_sequence() {
            let client = MockLlmClient::new(vec!["a transcript"]);
            let text = client.transcribe(b"bytes", "audio/wav").await.unwrap();
            assert_eq!(text, "a transcript");
        }
    }
}

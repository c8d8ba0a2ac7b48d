//! Mock language model adapter for testing without API calls.
//!
//! Replays a scripted reply, optionally after a delay, and counts calls.

use crate::domain::DomainError;
use crate::ports::{CompletionRequest, LanguageModelPort};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::info;

/// What the mock answers with.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Raw model content (may or may not be valid JSON).
    Content(String),
    /// Provider failure with the given message.
    Error(String),
}

/// Mock language model adapter.
///
/// Returns a predetermined reply without making network calls. Simulates
/// network latency with a configurable delay.
pub struct MockLlmAdapter {
    reply: MockReply,
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    calls: AtomicUsize,
}

impl MockLlmAdapter {
    /// Create a mock adapter with no delay.
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            delay_ms: 0,
            calls: AtomicUsize::new(0),
        }
    }

    /// Set a simulated network delay.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Number of `complete` calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LanguageModelPort for MockLlmAdapter {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        info!(
            prompt_len = request.user.len(),
            "[MOCK] Simulating language model completion"
        );

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.reply {
            MockReply::Content(content) => Ok(content.clone()),
            MockReply::Error(msg) => Err(DomainError::Provider(msg.clone())),
        }
    }
}

//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// One chat-completion call to a generative language model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Generative language model provider.
#[async_trait::async_trait]
pub trait LanguageModelPort: Send + Sync {
    /// Send a single completion request and return the raw text content of the
    /// first choice.
    ///
    /// Unreachable provider, non-success status and empty content all map to
    /// `DomainError::Provider`. The content itself is untrusted and is not
    /// parsed here.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;
}

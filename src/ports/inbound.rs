//! Inbound port. The HTTP gateway (adapter) calls into the application.

use crate::domain::{AnalysisRequest, AnalysisResult, DomainError};

/// Input port: classify one validated journal entry.
///
/// Implementations degrade internally on provider failure; an `Err` here means
/// an unexpected fault and is surfaced to the caller as a server error.
#[async_trait::async_trait]
pub trait MoodAnalysisPort: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, DomainError>;

    /// True when a language model backs the primary path.
    fn has_model(&self) -> bool;
}

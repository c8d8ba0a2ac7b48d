//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Client input rejected before classification.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network failure, non-success status, empty content or timeout.
    #[error("Language model provider error: {0}")]
    Provider(String),

    /// Model answered, but not with a usable AnalysisResult.
    #[error("Invalid model output: {0}")]
    InvalidModelOutput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

//! Inbound body validation. Turns raw JSON into an [`AnalysisRequest`].

use crate::domain::{AnalysisRequest, DomainError, MAX_TEXT_CHARS, Source};
use serde_json::Value;

pub const TEXT_REQUIRED: &str = "text field is required";

pub fn text_too_long() -> String {
    format!("text too long (max {} characters)", MAX_TEXT_CHARS)
}

/// Validate an analysis request body. First failure wins:
/// missing/non-string/blank `text` (an unparseable body has no `text` either),
/// then over-long `text`.
/// An unknown `source` quietly becomes `text`.
pub fn parse_analysis_request(body: &[u8]) -> Result<AnalysisRequest, DomainError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| DomainError::InvalidRequest(TEXT_REQUIRED.to_string()))?;

    let text = value
        .get("text")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| DomainError::InvalidRequest(TEXT_REQUIRED.to_string()))?;

    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(DomainError::InvalidRequest(text_too_long()));
    }

    let source = Source::from_lenient(value.get("source").and_then(Value::as_str));

    Ok(AnalysisRequest {
        text: text.to_string(),
        source,
    })
}

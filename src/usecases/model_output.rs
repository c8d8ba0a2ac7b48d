//! Parse-then-validate boundary for untrusted model output.
//!
//! Models sometimes wrap the JSON answer in prose or markdown fences despite
//! instructions. We pull out the first balanced `{...}` span, decode it into an
//! [`AnalysisResult`] and validate every field. Anything short of full success
//! is an error; there is no partial acceptance.

use crate::domain::{AnalysisResult, DomainError};

/// Return the first balanced JSON-object substring of `raw`.
///
/// Braces inside string literals (including escaped quotes) are ignored. If a
/// `{` never closes, scanning resumes from the next `{`.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let bytes = raw.as_bytes();
    let mut search_from = 0;

    while let Some(offset) = raw[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(end) = balanced_end(bytes, start) {
            return Some(&raw[start..=end]);
        }
        search_from = start + 1;
    }
    None
}

/// Index of the `}` closing the object opened at `start`, if any.
fn balanced_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Extract, decode and validate a model answer.
pub fn parse_model_output(raw: &str) -> Result<AnalysisResult, DomainError> {
    let candidate = extract_json_object(raw)
        .ok_or_else(|| DomainError::InvalidModelOutput("no JSON object in response".into()))?;

    let result: AnalysisResult = serde_json::from_str(candidate)
        .map_err(|e| DomainError::InvalidModelOutput(format!("decode failed: {}", e)))?;

    result.validate().map_err(DomainError::InvalidModelOutput)?;
    Ok(result)
}

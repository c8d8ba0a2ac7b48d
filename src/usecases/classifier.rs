//! Emotion classifier. Primary path through a language model, keyword fallback.
//!
//! The classifier never fails on its own: any provider or output problem is
//! logged and answered from the keyword lexicon instead.

use crate::domain::{
    AnalysisRequest, AnalysisResult, ClassificationOutcome, DomainError, Emotion,
    classify_by_keywords,
};
use crate::ports::{CompletionRequest, LanguageModelPort, MoodAnalysisPort};
use crate::usecases::model_output::parse_model_output;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default bound on a single provider call.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(5);

/// Output ceiling for the model; the answer is one short JSON object.
const MAX_OUTPUT_TOKENS: u32 = 200;

const SYSTEM_INSTRUCTION: &str = "You are an empathetic analyzer. Return ONLY valid JSON matching the exact schema provided. No additional text.";

/// Stateless mood classifier. Cheap to share behind `Arc` across requests.
pub struct MoodClassifier {
    /// `None` means fallback-only operation (no provider configured).
    model: Option<Arc<dyn LanguageModelPort>>,
    timeout: Duration,
}

impl MoodClassifier {
    /// Create a classifier.
    ///
    /// # Arguments
    /// * `model` - Language model adapter, or `None` to skip the primary path entirely
    /// * `timeout` - Upper bound on the provider call; expiry counts as a provider failure
    pub fn new(model: Option<Arc<dyn LanguageModelPort>>, timeout: Duration) -> Self {
        Self { model, timeout }
    }

    /// Classifier that only uses the keyword rules.
    pub fn fallback_only() -> Self {
        Self::new(None, DEFAULT_PROVIDER_TIMEOUT)
    }

    /// Classify `text`, reporting which path produced the result.
    pub async fn classify(&self, text: &str) -> ClassificationOutcome {
        let Some(model) = &self.model else {
            debug!("no language model configured, using keyword classifier");
            return ClassificationOutcome::Fallback(classify_by_keywords(text));
        };

        match self.try_primary(model.as_ref(), text).await {
            Ok(result) => ClassificationOutcome::Primary(result),
            Err(e) => {
                warn!(error = %e, "primary classification failed, falling back to keywords");
                ClassificationOutcome::Fallback(classify_by_keywords(text))
            }
        }
    }

    /// Single attempt: call, extract, decode, validate. No retry.
    async fn try_primary(
        &self,
        model: &dyn LanguageModelPort,
        text: &str,
    ) -> Result<AnalysisResult, DomainError> {
        let request = Self::completion_request(text);

        let raw = tokio::time::timeout(self.timeout, model.complete(&request))
            .await
            .map_err(|_| {
                DomainError::Provider(format!("timed out after {} ms", self.timeout.as_millis()))
            })??;

        if raw.trim().is_empty() {
            return Err(DomainError::Provider("empty content".into()));
        }

        parse_model_output(&raw)
    }

    /// Build the provider request: zero temperature, small output ceiling.
    pub fn completion_request(text: &str) -> CompletionRequest {
        CompletionRequest {
            system: SYSTEM_INSTRUCTION.to_string(),
            user: Self::build_prompt(text),
            temperature: 0.0,
            max_tokens: MAX_OUTPUT_TOKENS,
        }
    }

    /// Directive prompt asking for exactly one JSON object in our schema.
    pub fn build_prompt(text: &str) -> String {
        let emotions = Emotion::ALL
            .iter()
            .map(|e| format!("\"{}\"", e))
            .collect::<Vec<_>>()
            .join(",");
        // JSON-quote the user text so embedded quotes cannot break the prompt framing.
        let quoted = serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text));

        format!(
            r##"You are an empathetic analyzer. When given a short user text, produce ONLY a JSON object (no explanation, no surrounding text) that matches the following schema exactly:
{{
  "emotion": one of [{emotions}],
  "confidence": a number between 0.0 and 1.0,
  "message": a 1-2 sentence empathetic reply,
  "action": a short practical micro-action (max 10 words),
  "color": a hex color string like "#AABBCC" suitable for UI theme,
  "tag": a short keyword tag
}}
Be concise, deterministic, and avoid speculative language. Do not include any extra fields or commentary. If you cannot determine an emotion, return "neutral" with confidence 0.5.

Analyze this text: {quoted}"##
        )
    }
}

#[async_trait::async_trait]
impl MoodAnalysisPort for MoodClassifier {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, DomainError> {
        let outcome = self.classify(&request.text).await;
        let result = outcome.result();
        info!(
            source = %request.source,
            text_chars = request.text.chars().count(),
            emotion = %result.emotion,
            confidence = result.confidence,
            primary = outcome.is_primary(),
            "mood analyzed"
        );
        Ok(outcome.into_result())
    }

    fn has_model(&self) -> bool {
        self.model.is_some()
    }
}

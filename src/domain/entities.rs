//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/provider types here. Everything is transient: built, used and
//! dropped within a single analysis request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted length of journal text, in characters.
pub const MAX_TEXT_CHARS: usize = 500;

/// Fixed six-value emotion classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Anxious,
    Neutral,
    Angry,
    Calm,
}

impl Emotion {
    pub const ALL: [Emotion; 6] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Anxious,
        Emotion::Neutral,
        Emotion::Angry,
        Emotion::Calm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Anxious => "anxious",
            Emotion::Neutral => "neutral",
            Emotion::Angry => "angry",
            Emotion::Calm => "calm",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the journal text came from. Voice entries are already transcribed
/// by the client before they reach us.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Text,
    Voice,
}

impl Source {
    /// Lenient parse: anything other than `text`/`voice` becomes `Text`.
    pub fn from_lenient(raw: Option<&str>) -> Self {
        match raw {
            Some("voice") => Source::Voice,
            _ => Source::Text,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Text => f.write_str("text"),
            Source::Voice => f.write_str("voice"),
        }
    }
}

/// A validated analysis request. `text` is trimmed, non-empty and at most
/// [`MAX_TEXT_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub text: String,
    pub source: Source,
}

/// Structured emotional assessment returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub emotion: Emotion,
    pub confidence: f64,
    pub message: String,
    pub action: String,
    /// `#RRGGBB`
    pub color: String,
    pub tag: String,
}

impl AnalysisResult {
    /// Check the field invariants that the type system does not enforce.
    ///
    /// Returns a description of the first violated invariant.
    pub fn validate(&self) -> Result<(), String> {
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!("confidence {} outside [0, 1]", self.confidence));
        }
        if !is_hex_color(&self.color) {
            return Err(format!("color {:?} is not #RRGGBB", self.color));
        }
        for (name, value) in [
            ("message", &self.message),
            ("action", &self.action),
            ("tag", &self.tag),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{} is empty", name));
            }
        }
        Ok(())
    }
}

/// `#` followed by exactly six hex digits, either case.
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Which path produced a result. Never exposed over HTTP.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationOutcome {
    /// Language-model derived, fully validated.
    Primary(AnalysisResult),
    /// Keyword-rule derived.
    Fallback(AnalysisResult),
}

impl ClassificationOutcome {
    pub fn is_primary(&self) -> bool {
        matches!(self, ClassificationOutcome::Primary(_))
    }

    pub fn result(&self) -> &AnalysisResult {
        match self {
            ClassificationOutcome::Primary(r) | ClassificationOutcome::Fallback(r) => r,
        }
    }

    pub fn into_result(self) -> AnalysisResult {
        match self {
            ClassificationOutcome::Primary(r) | ClassificationOutcome::Fallback(r) => r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            emotion: Emotion::Calm,
            confidence: 0.8,
            message: "Nice and steady.".to_string(),
            action: "Keep breathing".to_string(),
            color: "#84dcc6".to_string(),
            tag: "mindfulness".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_confidence_out_of_range() {
        let mut r = sample();
        r.confidence = 1.2;
        assert!(r.validate().is_err());
        r.confidence = -0.1;
        assert!(r.validate().is_err());
        r.confidence = f64::NAN;
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_color_and_blank_fields() {
        let mut r = sample();
        r.color = "blue".to_string();
        assert!(r.validate().is_err());

        let mut r = sample();
        r.tag = "   ".to_string();
        assert_eq!(r.validate().unwrap_err(), "tag is empty");
    }

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#FFB86B"));
        assert!(is_hex_color("#e6eef7"));
        assert!(!is_hex_color("FFB86B"));
        assert!(!is_hex_color("#FFF"));
        assert!(!is_hex_color("#GGGGGG"));
        assert!(!is_hex_color("#FFB86B0"));
    }

    #[test]
    fn test_emotion_serde_lowercase() {
        let json = serde_json::to_string(&Emotion::Anxious).unwrap();
        assert_eq!(json, "\"anxious\"");
        let e: Emotion = serde_json::from_str("\"calm\"").unwrap();
        assert_eq!(e, Emotion::Calm);
        assert!(serde_json::from_str::<Emotion>("\"bored\"").is_err());
    }

    #[test]
    fn test_source_lenient() {
        assert_eq!(Source::from_lenient(Some("voice")), Source::Voice);
        assert_eq!(Source::from_lenient(Some("text")), Source::Text);
        assert_eq!(Source::from_lenient(Some("telepathy")), Source::Text);
        assert_eq!(Source::from_lenient(None), Source::Text);
    }
}

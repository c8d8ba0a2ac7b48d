//! Keyword lexicon and canned templates for rule-based classification.
//!
//! Read-only statics. Rules are checked in table order and the first category
//! with any substring hit wins, so the order of [`RULES`] is part of the
//! behavior.

use super::entities::{AnalysisResult, Emotion};

/// Canned result for one category. Confidence is constant per category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Template {
    pub emotion: Emotion,
    pub confidence: f64,
    pub message: &'static str,
    pub action: &'static str,
    pub color: &'static str,
    pub tag: &'static str,
}

impl Template {
    pub fn to_result(&self) -> AnalysisResult {
        AnalysisResult {
            emotion: self.emotion,
            confidence: self.confidence,
            message: self.message.to_string(),
            action: self.action.to_string(),
            color: self.color.to_string(),
            tag: self.tag.to_string(),
        }
    }
}

/// One keyword category: lower-case substrings and the template they select.
#[derive(Debug)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub template: Template,
}

/// Priority order: anxious, happy, sad, angry, calm.
pub static RULES: [Rule; 5] = [
    Rule {
        keywords: &[
            "anxious",
            "nervous",
            "can't sleep",
            "stressed",
            "panic",
            "worried",
            "exam",
            "test",
            "deadline",
        ],
        template: Template {
            emotion: Emotion::Anxious,
            confidence: 0.65,
            message: "It's normal to feel anxious. Try a short breathing exercise to calm your mind.",
            action: "4-4-6 breathing for 2 minutes",
            color: "#FFB86B",
            tag: "anxiety-relief",
        },
    },
    Rule {
        keywords: &[
            "happy",
            "excited",
            "got",
            "offer",
            "great",
            "awesome",
            "celebrate",
            "love",
            "amazing",
        ],
        template: Template {
            emotion: Emotion::Happy,
            confidence: 0.70,
            message: "That's wonderful! Celebrate this moment and share your joy with others.",
            action: "Write down 3 things you're grateful for",
            color: "#7AD1FF",
            tag: "celebration",
        },
    },
    Rule {
        keywords: &[
            "sad", "depressed", "unhappy", "lost", "cry", "hurt", "lonely", "miss",
        ],
        template: Template {
            emotion: Emotion::Sad,
            confidence: 0.68,
            message: "It's okay to feel sad. Be gentle with yourself and reach out to someone you trust.",
            action: "Listen to uplifting music for 10 minutes",
            color: "#6C7BFF",
            tag: "sadness-support",
        },
    },
    Rule {
        keywords: &["angry", "mad", "furious", "upset", "hate", "annoyed"],
        template: Template {
            emotion: Emotion::Angry,
            confidence: 0.66,
            message: "Anger is valid. Take a moment to process your feelings before responding.",
            action: "Take a 5-minute walk outside",
            color: "#FF6B6B",
            tag: "anger-management",
        },
    },
    Rule {
        keywords: &["calm", "peaceful", "relaxed", "content", "serene", "tranquil"],
        template: Template {
            emotion: Emotion::Calm,
            confidence: 0.72,
            message: "Great to hear you're feeling calm. Enjoy this peaceful state of mind.",
            action: "Practice mindfulness for 3 minutes",
            color: "#84DCC6",
            tag: "mindfulness",
        },
    },
];

/// Returned when no rule matches.
pub static NEUTRAL: Template = Template {
    emotion: Emotion::Neutral,
    confidence: 0.55,
    message: "Thanks for sharing. Take a moment to reflect on how you're really feeling.",
    action: "Journal for 5 minutes",
    color: "#E6EEF7",
    tag: "reflection",
};

/// First rule (in priority order) with a keyword contained in `text`,
/// compared case-insensitively.
pub fn match_rule(text: &str) -> Option<&'static Rule> {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
}

/// Deterministic keyword classification. Pure: same text, same result.
pub fn classify_by_keywords(text: &str) -> AnalysisResult {
    match_rule(text)
        .map(|rule| &rule.template)
        .unwrap_or(&NEUTRAL)
        .to_result()
}

//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the keyword lexicon and errors live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod lexicon;

pub use entities::{
    AnalysisRequest, AnalysisResult, ClassificationOutcome, Emotion, MAX_TEXT_CHARS, Source,
};
pub use errors::DomainError;
pub use lexicon::classify_by_keywords;

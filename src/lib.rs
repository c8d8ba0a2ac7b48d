//! moodlens: mood-analysis service with Hexagonal Architecture.
//!
//! Classifies journal text with a language model when one is configured and
//! falls back to deterministic keyword rules otherwise.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;

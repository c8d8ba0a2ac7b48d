//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the HTTP gateway into the application
//! - Outbound: Called by application into infrastructure (language model)

pub mod inbound;
pub mod outbound;

pub use inbound::MoodAnalysisPort;
pub use outbound::{CompletionRequest, LanguageModelPort};

//! Application use cases. Orchestrate domain logic via ports.

pub mod classifier;
pub mod model_output;

pub use classifier::{DEFAULT_PROVIDER_TIMEOUT, MoodClassifier};
pub use model_output::{extract_json_object, parse_model_output};

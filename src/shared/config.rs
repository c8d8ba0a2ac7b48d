//! Application configuration. Provider credentials, listener, limits.

use serde::Deserialize;
use std::time::Duration;

/// Default bind host for the HTTP gateway.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8787;

/// Default request body ceiling. 500 characters of text fit many times over.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

/// Default provider timeout in milliseconds.
pub const DEFAULT_AI_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Language model provider
    // ─────────────────────────────────────────────────────────────────────────
    /// Provider API key. Read from MOODLENS_AI_API_KEY or OPENAI_API_KEY.
    /// Presence gates the primary (model) path.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Chat completions URL. Defaults to OpenAI. Read from MOODLENS_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Defaults to "gpt-4o-mini". Read from MOODLENS_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Bound on a single provider call. Read from MOODLENS_AI_TIMEOUT_MS.
    #[serde(default)]
    pub ai_timeout_ms: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // HTTP gateway
    // ─────────────────────────────────────────────────────────────────────────
    /// Read from MOODLENS_HOST.
    #[serde(default)]
    pub host: Option<String>,

    /// Read from MOODLENS_PORT.
    #[serde(default)]
    pub port: Option<u16>,

    /// Max accepted request body in bytes. Read from MOODLENS_MAX_BODY_BYTES.
    #[serde(default)]
    pub max_body_bytes: Option<usize>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("MOODLENS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("MOODLENS").try_parsing(true));
        c.build()?.try_deserialize()
    }

    /// Returns the provider API key if configured. Reads from config, then
    /// OPENAI_API_KEY. Blank values count as unset.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    /// Returns the provider URL. Defaults to OpenAI chat completions endpoint.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com/v1/chat/completions".to_string())
    }

    /// Returns the model name. Defaults to "gpt-4o-mini".
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| "gpt-4o-mini".to_string())
    }

    /// Returns the provider timeout. Defaults to 5 seconds.
    pub fn ai_timeout_or_default(&self) -> Duration {
        Duration::from_millis(self.ai_timeout_ms.unwrap_or(DEFAULT_AI_TIMEOUT_MS))
    }

    /// Returns true if the primary path should be attempted (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }

    /// Returns `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!(
            "{}:{}",
            self.host.as_deref().unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT)
        )
    }

    /// Returns the request body ceiling in bytes.
    pub fn max_body_bytes_or_default(&self) -> usize {
        self.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES)
    }
}

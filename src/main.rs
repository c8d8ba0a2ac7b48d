//! Wiring & DI. Entry point: load config, build adapters, inject into the
//! classifier, serve HTTP. No business logic here.

use dotenv::dotenv;
use moodlens::adapters::ai::OpenAiAdapter;
use moodlens::adapters::http::{AppState, create_router, run_server};
use moodlens::ports::{LanguageModelPort, MoodAnalysisPort};
use moodlens::shared::AppConfig;
use moodlens::usecases::MoodClassifier;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,moodlens=info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });

    moodlens::adapters::ui::init_ui(cfg.is_ai_configured());

    // --- Language model: only wired when a key is present ---
    let timeout = cfg.ai_timeout_or_default();
    let model: Option<Arc<dyn LanguageModelPort>> = match cfg.ai_api_key() {
        Some(key) => {
            info!(
                model = %cfg.ai_model_or_default(),
                url = %cfg.ai_api_url_or_default(),
                timeout_ms = timeout.as_millis() as u64,
                "primary classification enabled with OpenAI adapter"
            );
            let adapter: Arc<dyn LanguageModelPort> = Arc::new(
                OpenAiAdapter::new(
                    cfg.ai_api_url_or_default(),
                    key,
                    cfg.ai_model_or_default(),
                    timeout,
                )
                .map_err(|e| anyhow::anyhow!("{}", e))?,
            );
            Some(adapter)
        }
        None => {
            warn!("MOODLENS_AI_API_KEY not set, using keyword classifier only");
            None
        }
    };

    let classifier: Arc<dyn MoodAnalysisPort> = Arc::new(MoodClassifier::new(model, timeout));
    let app = create_router(AppState::new(classifier), cfg.max_body_bytes_or_default());

    run_server(app, &cfg.bind_addr()).await
}

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod llm;
mod script;
mod tts;

use api::routes::{create_router, AppState};
use config::Config;
use llm::GeminiClient;
use tts::ElevenLabsClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A .env file fills in anything the environment leaves unset
    config::load_dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration from environment
    let config = Config::from_env()?;

    tracing::info!("Ad Script Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Starting server on http://{}", config.addr);
    tracing::info!("Static directory: {}", config.static_dir.display());

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, every script will use the fallback");
    }
    if config.elevenlabs_api_key.is_none() {
        tracing::warn!("ELEVENLABS_API_KEY is not set, /tts will fail");
    }

    // Create upstream clients
    let generator = GeminiClient::new(
        config.gemini_api_key.clone(),
        llm::gemini::DEFAULT_BASE_URL,
        config.upstream_timeout,
    )?;
    let synthesizer = ElevenLabsClient::new(
        config.elevenlabs_api_key.clone(),
        tts::elevenlabs::DEFAULT_BASE_URL,
        config.upstream_timeout,
    )?;

    // Create app state
    let state = Arc::new(AppState {
        generator: Arc::new(generator),
        synthesizer: Arc::new(synthesizer),
    });

    // Create router
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}

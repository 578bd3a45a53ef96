use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::llm::ScriptGenerator;
use crate::tts::SpeechSynthesizer;

/// Upstream clients, built once at startup and shared by every request.
pub struct AppState {
    pub generator: Arc<dyn ScriptGenerator>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
}

pub fn create_router(state: Arc<AppState>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/generate-script", post(handlers::generate_script))
        .route("/tts", post(handlers::tts))
        .route("/health", get(handlers::health))
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

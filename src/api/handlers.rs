use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::{HealthResponse, ScriptRequest, ScriptResponse, SpeechRequest};
use crate::api::routes::AppState;
use crate::error::AppError;
use crate::script;
use crate::tts::collect_audio;

/// Always answers 200; a failed generation degrades to the fallback script.
pub async fn generate_script(
    State(state): State<Arc<AppState>>,
    request: Option<Json<ScriptRequest>>,
) -> Json<ScriptResponse> {
    let request = request.map(|Json(r)| r).unwrap_or_default();

    let script = script::generate_script(state.generator.as_ref(), &request).await;

    Json(ScriptResponse { script })
}

pub async fn tts(
    State(state): State<Arc<AppState>>,
    request: Option<Json<SpeechRequest>>,
) -> Result<Response, AppError> {
    let request = request.map(|Json(r)| r).unwrap_or_default();

    // Validate input
    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text is required".into()));
    }

    // Buffer the whole stream so no partial audio is ever sent
    let stream = state.synthesizer.synthesize(&request.text).await?;
    let audio = collect_audio(stream).await?;

    tracing::debug!(bytes = audio.len(), "Synthesized audio");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg")),
            (header::CONTENT_LENGTH, HeaderValue::from(audio.len())),
        ],
        audio,
    )
        .into_response())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

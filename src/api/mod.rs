pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

pub use crate::script::ScriptRequest;

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub script: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SpeechRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

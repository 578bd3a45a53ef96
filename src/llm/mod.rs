pub mod gemini;

use async_trait::async_trait;

pub use gemini::GeminiClient;

#[derive(thiserror::Error, Debug)]
pub enum LlmError {
    #[error("Missing Gemini API key")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No candidates returned by Gemini")]
    NoCandidates,

    #[error("Empty Gemini response")]
    EmptyResponse,
}

/// A generative-text backend that turns a prompt into text.
#[async_trait]
pub trait ScriptGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

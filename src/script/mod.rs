pub mod beats;
pub mod fallback;
pub mod prompt;

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::llm::{LlmError, ScriptGenerator};

pub use fallback::fallback_script;
pub use prompt::build_prompt;

/// The brief a caller submits for an ad script.
///
/// Missing or null fields deserialize as empty strings, numbers and
/// booleans as their text, and everything is used as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptRequest {
    #[serde(deserialize_with = "lenient_text")]
    pub business_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub service: String,
    #[serde(deserialize_with = "lenient_text")]
    pub target_audience: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientText)
}

struct LenientText;

impl<'de> Visitor<'de> for LenientText {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }
}

/// Result of one generation attempt.
#[derive(Debug)]
pub enum GenerationOutcome {
    Generated(String),
    Failed(LlmError),
}

impl GenerationOutcome {
    /// Ask the generator once. Blank output counts as a failure.
    pub async fn attempt(generator: &dyn ScriptGenerator, prompt: &str) -> Self {
        match generator.generate(prompt).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    GenerationOutcome::Failed(LlmError::EmptyResponse)
                } else {
                    GenerationOutcome::Generated(text.to_string())
                }
            }
            Err(e) => GenerationOutcome::Failed(e),
        }
    }
}

/// Produce a script for the brief, falling back to the canned template
/// when generation fails. Never returns an empty string.
pub async fn generate_script(generator: &dyn ScriptGenerator, request: &ScriptRequest) -> String {
    let prompt = build_prompt(request);

    match GenerationOutcome::attempt(generator, &prompt).await {
        GenerationOutcome::Generated(script) => {
            if let Err(e) = beats::check_structure(&script) {
                tracing::warn!("Generated script deviates from the beat structure: {}", e);
            }
            script
        }
        GenerationOutcome::Failed(e) => {
            tracing::warn!("Gemini failed, using structured fallback: {}", e);
            fallback_script(request)
        }
    }
}

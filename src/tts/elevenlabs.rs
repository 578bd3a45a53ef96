use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use serde::Serialize;

use super::{AudioStream, SpeechSynthesizer, TtsError};

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_VOICE_ID: &str = "AtX6p0vItOfWBULsG7XF";
pub const DEFAULT_MODEL_ID: &str = "eleven_v3";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// Client for the ElevenLabs streaming text-to-speech endpoint.
///
/// Voice, model and voice settings are fixed for every request.
pub struct ElevenLabsClient {
    api_key: Option<String>,
    voice_id: String,
    model_id: String,
    settings: VoiceSettings,
    base_url: String,
    client: Client,
}

impl ElevenLabsClient {
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TtsError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_key,
            voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            settings: VoiceSettings::default(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/text-to-speech/{}/stream", self.base_url, self.voice_id)
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsClient {
    async fn synthesize(&self, text: &str) -> Result<AudioStream, TtsError> {
        let api_key = self.api_key.as_deref().ok_or(TtsError::MissingApiKey)?;

        let body = SpeechRequest {
            text,
            model_id: &self.model_id,
            voice_settings: self.settings,
        };

        tracing::debug!(
            voice = %self.voice_id,
            model = %self.model_id,
            text_len = text.len(),
            "Starting TTS stream"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("xi-api-key", api_key)
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TtsError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| TtsError::Stream(e.to_string())))
            .boxed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tts::collect_audio;

    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str, api_key: Option<&str>) -> ElevenLabsClient {
        ElevenLabsClient::new(
            api_key.map(str::to_string),
            base_url,
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn synthesize_sends_fixed_voice_parameters() {
        let server = MockServer::start().await;
        let audio = vec![0x49, 0x44, 0x33, 0x04, 0x00, 0xff, 0xfb];

        Mock::given(method("POST"))
            .and(path("/v1/text-to-speech/AtX6p0vItOfWBULsG7XF/stream"))
            .and(header("xi-api-key", "test-key"))
            .and(body_json(serde_json::json!({
                "text": "नमस्कार",
                "model_id": "eleven_v3",
                "voice_settings": { "stability": 0.5, "similarity_boost": 0.75 }
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "audio/mpeg")
                    .set_body_bytes(audio.clone()),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), Some("test-key"));
        let stream = client.synthesize("नमस्कार").await.unwrap();

        assert_eq!(collect_audio(stream).await.unwrap(), audio);
    }

    #[tokio::test]
    async fn synthesize_maps_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), Some("bad-key"));
        let err = client.synthesize("hello").await.err().unwrap();

        match err {
            TtsError::Upstream { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(b"ID3".to_vec())
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = ElevenLabsClient::new(
            Some("test-key".into()),
            server.uri(),
            Duration::from_millis(200),
        )
        .unwrap();

        match client.synthesize("hello").await {
            Err(TtsError::Http(e)) => assert!(e.is_timeout()),
            Err(other) => panic!("expected a timeout, got {other:?}"),
            Ok(_) => panic!("expected a timeout, got audio"),
        }
    }

    #[tokio::test]
    async fn synthesize_without_key_skips_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server.uri(), None);
        let err = client.synthesize("hello").await.err().unwrap();

        assert!(matches!(err, TtsError::MissingApiKey));
    }
}

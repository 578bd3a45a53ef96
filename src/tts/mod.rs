pub mod elevenlabs;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;

pub use elevenlabs::ElevenLabsClient;

#[derive(thiserror::Error, Debug)]
pub enum TtsError {
    #[error("Missing ElevenLabs API key")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ElevenLabs returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Audio stream interrupted: {0}")]
    Stream(String),
}

/// Audio chunks in the order the upstream produced them.
pub type AudioStream = BoxStream<'static, Result<Bytes, TtsError>>;

/// A text-to-speech backend that yields audio as a stream of chunks.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<AudioStream, TtsError>;
}

/// Drain an audio stream into one contiguous buffer.
///
/// Any chunk error discards everything read so far.
pub async fn collect_audio(mut stream: AudioStream) -> Result<Vec<u8>, TtsError> {
    let mut audio = Vec::new();

    while let Some(chunk) = stream.next().await {
        audio.extend_from_slice(&chunk?);
    }

    Ok(audio)
}

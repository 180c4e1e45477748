//! Boundary to the external speech-to-text capability.
//!
//! A recognizer is single-shot: one activation ends in exactly one terminal
//! event, a transcript or a [`RecognitionError`]. Only a non-blank transcript
//! ever reaches the scoring engine.

mod task;

pub use task::RecognitionTask;

use async_trait::async_trait;
use thiserror::Error;

pub const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionError {
    #[error("microphone permission denied")]
    PermissionDenied,
    #[error("no speech detected")]
    NoSpeech,
    #[error("network error during speech recognition")]
    Network,
    #[error("speech recognition aborted")]
    Aborted,
    #[error("speech recognition failed: {0}")]
    Other(String),
}

impl RecognitionError {
    /// Map an error code reported by a recognizer.
    pub fn from_code(code: &str) -> Self {
        match code {
            "not-allowed" | "permission-denied" => Self::PermissionDenied,
            "no-speech" => Self::NoSpeech,
            "network" => Self::Network,
            "aborted" => Self::Aborted,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::PermissionDenied => "permission-denied",
            Self::NoSpeech => "no-speech",
            Self::Network => "network",
            Self::Aborted => "aborted",
            Self::Other(code) => code,
        }
    }

    /// A manual stop is not a failure and is never shown to the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Source language the recognizer is bound to.
    fn language(&self) -> &str;

    async fn recognize(&self) -> Result<String, RecognitionError>;
}

/// Recognizer for a transcript that was already produced elsewhere
/// (command line argument, stdin, HTTP request body).
pub struct TranscriptRecognizer {
    transcript: String,
    language: String,
}

impl TranscriptRecognizer {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[async_trait]
impl SpeechRecognizer for TranscriptRecognizer {
    fn name(&self) -> &'static str {
        "TranscriptRecognizer"
    }

    fn language(&self) -> &str {
        &self.language
    }

    async fn recognize(&self) -> Result<String, RecognitionError> {
        Ok(self.transcript.clone())
    }
}

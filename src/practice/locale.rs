use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::PracticeError;
use crate::recognition::RecognitionError;
use crate::scoring::FeedbackTier;

/// Display language. Only selects strings, never changes how attempts are scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    pub fn tier_message(&self, tier: FeedbackTier) -> &'static str {
        match (self, tier) {
            (Self::En, FeedbackTier::Excellent) => "Excellent! Perfect pronunciation!",
            (Self::En, FeedbackTier::Good) => "Good job! Keep practicing!",
            (Self::En, FeedbackTier::NeedsImprovement) => "Keep trying! Practice makes perfect!",
            (Self::Es, FeedbackTier::Excellent) => "¡Excelente! ¡Pronunciación perfecta!",
            (Self::Es, FeedbackTier::Good) => "¡Buen trabajo! ¡Sigue practicando!",
            (Self::Es, FeedbackTier::NeedsImprovement) => {
                "¡Sigue intentando! ¡La práctica hace al maestro!"
            }
        }
    }

    /// Message for a failed recognition, `None` when nothing should be shown.
    pub fn recognition_message(&self, error: &RecognitionError) -> Option<&'static str> {
        let message = match (self, error) {
            (_, RecognitionError::Aborted) => return None,
            (Self::En, RecognitionError::PermissionDenied) => {
                "Microphone permission denied. Please allow microphone access."
            }
            (Self::Es, RecognitionError::PermissionDenied) => {
                "Permiso de micrófono denegado. Por favor, permite el acceso al micrófono."
            }
            (Self::En, RecognitionError::NoSpeech) => {
                "No speech detected. Please try speaking again."
            }
            (Self::Es, RecognitionError::NoSpeech) => {
                "No se detectó habla. Por favor, intenta hablar de nuevo."
            }
            (Self::En, RecognitionError::Network) => {
                "Network error. Please check your connection."
            }
            (Self::Es, RecognitionError::Network) => {
                "Error de red. Por favor, verifica tu conexión."
            }
            (Self::En, RecognitionError::Other(_)) => {
                "Speech recognition error. Please try again."
            }
            (Self::Es, RecognitionError::Other(_)) => {
                "Error de reconocimiento de voz. Por favor, intenta de nuevo."
            }
        };
        Some(message)
    }

    pub fn error_message(&self, error: &PracticeError) -> Option<&'static str> {
        match (self, error) {
            (_, PracticeError::Recognition(err)) => self.recognition_message(err),
            (Self::En, PracticeError::ExerciseUnavailable) => Some("Failed to load exercise"),
            (Self::Es, PracticeError::ExerciseUnavailable) => {
                Some("No se pudo cargar el ejercicio")
            }
            (Self::En, PracticeError::IncompleteAttempt) => {
                Some("Please complete the recording first")
            }
            (Self::Es, PracticeError::IncompleteAttempt) => {
                Some("Por favor, completa la grabación primero")
            }
            (Self::En, PracticeError::AlreadyRecording) => Some("Recording already in progress"),
            (Self::Es, PracticeError::AlreadyRecording) => Some("Grabación ya en progreso"),
            (_, PracticeError::NotRecording) => None,
        }
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => anyhow::bail!("Unsupported locale '{}'. Supported: en, es", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_messages_per_locale() {
        assert_eq!(
            Locale::En.tier_message(FeedbackTier::Excellent),
            "Excellent! Perfect pronunciation!"
        );
        assert_eq!(
            Locale::Es.tier_message(FeedbackTier::Good),
            "¡Buen trabajo! ¡Sigue practicando!"
        );
    }

    #[test]
    fn test_aborted_has_no_message() {
        assert_eq!(Locale::En.recognition_message(&RecognitionError::Aborted), None);
        assert_eq!(
            Locale::Es.error_message(&PracticeError::Recognition(RecognitionError::Aborted)),
            None
        );
        assert!(Locale::En
            .recognition_message(&RecognitionError::NoSpeech)
            .is_some());
    }

    #[test]
    fn test_parse() {
        assert_eq!("es".parse::<Locale>().unwrap(), Locale::Es);
        assert!("fr".parse::<Locale>().is_err());
    }
}

//! Caller side of the scoring engine: gating attempts on a loaded exercise
//! and a real transcript, localized feedback, and handing results on.

mod locale;
mod session;

pub use locale::Locale;
pub use session::{AttemptPhase, Exercise, PracticeSession};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::recognition::RecognitionError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PracticeError {
    #[error("exercise content is not available")]
    ExerciseUnavailable,
    #[error(transparent)]
    Recognition(#[from] RecognitionError),
    #[error("complete the recording first")]
    IncompleteAttempt,
    #[error("a recording is already in progress")]
    AlreadyRecording,
    #[error("no recording in progress")]
    NotRecording,
}

/// What gets persisted for one submitted attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub exercise_id: String,
    pub score: u8,
    pub pronunciation_accuracy: u8,
    /// Localized tier message shown to the student
    pub feedback: String,
}

/// Persistence collaborator for submitted attempts.
pub trait ProgressSink: Send + Sync {
    /// Store the record and return its id.
    fn record(&self, record: &ProgressRecord) -> anyhow::Result<i64>;
}

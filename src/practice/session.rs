use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{Locale, PracticeError, ProgressRecord, ProgressSink};
use crate::recognition::{RecognitionError, RecognitionTask, SpeechRecognizer};
use crate::scoring::{ScoreResult, ScoringEngine};

/// The phrase a student is asked to say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub content: String,
}

impl Exercise {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptPhase {
    Idle,
    Recording,
    Scored,
}

impl AttemptPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Scored => "scored",
        }
    }
}

/// One student working through one exercise.
///
/// The engine only runs on a non-blank transcript delivered while a
/// recording is in flight. Cancelled recordings and recognition errors leave
/// the session idle with no result.
pub struct PracticeSession {
    engine: Arc<ScoringEngine>,
    locale: Locale,
    exercise: Option<Exercise>,
    /// Present while a recording is in flight; a cancelled token means the
    /// recording was abandoned.
    recording: Option<CancellationToken>,
    result: Option<ScoreResult>,
}

impl PracticeSession {
    pub fn new(engine: Arc<ScoringEngine>, locale: Locale) -> Self {
        Self {
            engine,
            locale,
            exercise: None,
            recording: None,
            result: None,
        }
    }

    /// Load the exercise to practice. Content without a single word cannot be scored.
    pub fn load_exercise(&mut self, exercise: Exercise) -> Result<(), PracticeError> {
        self.cancel_recording();
        self.result = None;

        if self.engine.normalizer().normalize(&exercise.content).word_count() == 0 {
            self.exercise = None;
            return Err(PracticeError::ExerciseUnavailable);
        }

        info!("Loaded exercise {}", exercise.id);
        self.exercise = Some(exercise);
        Ok(())
    }

    pub fn exercise(&self) -> Option<&Exercise> {
        self.exercise.as_ref()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_recording(&self) -> bool {
        self.recording
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    pub fn phase(&self) -> AttemptPhase {
        if self.is_recording() {
            AttemptPhase::Recording
        } else if self.result.is_some() {
            AttemptPhase::Scored
        } else {
            AttemptPhase::Idle
        }
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        self.result.as_ref()
    }

    /// Localized message for the current result's tier.
    pub fn feedback_message(&self) -> Option<&'static str> {
        self.result
            .as_ref()
            .map(|result| self.locale.tier_message(result.feedback))
    }

    /// Start a new attempt, discarding any previous result.
    pub fn begin_recording(&mut self) -> Result<(), PracticeError> {
        self.begin_with(CancellationToken::new())
    }

    fn begin_with(&mut self, token: CancellationToken) -> Result<(), PracticeError> {
        if self.exercise.is_none() {
            return Err(PracticeError::ExerciseUnavailable);
        }
        if self.is_recording() {
            return Err(PracticeError::AlreadyRecording);
        }

        self.result = None;
        self.recording = Some(token);
        debug!("Recording started");
        Ok(())
    }

    /// User stopped early. Nothing is scored.
    pub fn cancel_recording(&mut self) {
        if let Some(token) = self.recording.take() {
            if !token.is_cancelled() {
                debug!("Recording cancelled");
            }
            token.cancel();
        }
    }

    /// Feed the recognizer's terminal event into the session.
    pub fn complete_recording(
        &mut self,
        outcome: Result<String, RecognitionError>,
    ) -> Result<&ScoreResult, PracticeError> {
        if !self.is_recording() {
            self.recording = None;
            return Err(PracticeError::NotRecording);
        }
        self.finish_recording(outcome)
    }

    fn finish_recording(
        &mut self,
        outcome: Result<String, RecognitionError>,
    ) -> Result<&ScoreResult, PracticeError> {
        self.recording = None;

        let transcript = outcome?;
        if transcript.trim().is_empty() {
            return Err(RecognitionError::NoSpeech.into());
        }

        let exercise = self
            .exercise
            .as_ref()
            .ok_or(PracticeError::ExerciseUnavailable)?;

        let result = self.engine.score(&exercise.content, &transcript);
        info!(
            "Exercise {} scored {} ({})",
            exercise.id,
            result.overall_score,
            result.feedback.as_str()
        );

        Ok(&*self.result.insert(result))
    }

    /// Run one recognizer activation from start to terminal event.
    pub async fn attempt(
        &mut self,
        recognizer: Arc<dyn SpeechRecognizer>,
    ) -> Result<&ScoreResult, PracticeError> {
        self.attempt_until(recognizer, CancellationToken::new())
            .await
    }

    /// Like [`attempt`](Self::attempt), but cancelling `stop` ends the
    /// recording with [`RecognitionError::Aborted`].
    ///
    /// If the returned future is dropped before it finishes, the recognizer
    /// is cancelled and the session goes back to idle.
    pub async fn attempt_until(
        &mut self,
        recognizer: Arc<dyn SpeechRecognizer>,
        stop: CancellationToken,
    ) -> Result<&ScoreResult, PracticeError> {
        let token = stop.child_token();
        self.begin_with(token.clone())?;

        let outcome = RecognitionTask::with_token(recognizer, token).outcome().await;
        self.finish_recording(outcome)
    }

    /// Discard the current result and wait for a fresh attempt.
    pub fn try_again(&mut self) {
        self.result = None;
    }

    /// Build the record handed to the persistence collaborator.
    pub fn submit(&self) -> Result<ProgressRecord, PracticeError> {
        let exercise = self
            .exercise
            .as_ref()
            .ok_or(PracticeError::ExerciseUnavailable)?;
        let result = self.result.as_ref().ok_or(PracticeError::IncompleteAttempt)?;

        Ok(ProgressRecord {
            exercise_id: exercise.id.clone(),
            score: result.overall_score,
            pronunciation_accuracy: result.pronunciation_accuracy,
            feedback: self.locale.tier_message(result.feedback).to_string(),
        })
    }

    pub fn submit_to(&self, sink: &dyn ProgressSink) -> anyhow::Result<i64> {
        let record = self.submit()?;
        sink.record(&record)
    }
}

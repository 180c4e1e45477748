use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info, warn};

use super::{RecognitionError, SpeechRecognizer};

/// One in-flight activation of a recognizer.
///
/// Stopping (or dropping) the task cancels the recognizer; the terminal event
/// is then [`RecognitionError::Aborted`].
pub struct RecognitionTask {
    cancel: CancellationToken,
    handle: JoinHandle<Result<String, RecognitionError>>,
    _guard: DropGuard,
}

impl RecognitionTask {
    pub fn start(recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        Self::with_token(recognizer, CancellationToken::new())
    }

    /// Start a task that also stops when `cancel` is cancelled elsewhere.
    ///
    /// Dropping the task before its outcome is taken cancels `cancel`.
    pub fn with_token(recognizer: Arc<dyn SpeechRecognizer>, cancel: CancellationToken) -> Self {
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            info!(
                "Recognition started with {} ({})",
                recognizer.name(),
                recognizer.language()
            );

            tokio::select! {
                _ = token.cancelled() => {
                    debug!("Recognition cancelled before a result arrived");
                    Err(RecognitionError::Aborted)
                }
                outcome = recognizer.recognize() => match outcome {
                    Ok(transcript) if transcript.trim().is_empty() => Err(RecognitionError::NoSpeech),
                    other => other,
                },
            }
        });

        Self {
            _guard: cancel.clone().drop_guard(),
            cancel,
            handle,
        }
    }

    /// Stop listening. The recognizer gets no chance to produce a transcript.
    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the single terminal event.
    pub async fn outcome(self) -> Result<String, RecognitionError> {
        let Self { handle, _guard: guard, .. } = self;

        let joined = handle.await;
        let _ = guard.disarm();

        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(err) if err.is_cancelled() => Err(RecognitionError::Aborted),
            Err(err) => Err(RecognitionError::Other(format!(
                "recognition task failed: {err}"
            ))),
        };

        if let Err(err) = &outcome {
            if !err.is_silent() {
                warn!("Recognition ended without a transcript: {}", err);
            }
        }

        outcome
    }
}

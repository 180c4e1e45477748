//! Practice session gating and progress persistence.

use pronounce::db::ProgressStore;
use pronounce::history::{self, SearchParams};
use pronounce::practice::{
    AttemptPhase, Exercise, Locale, PracticeError, PracticeSession,
};
use pronounce::recognition::{RecognitionError, TranscriptRecognizer};
use pronounce::scoring::{FeedbackTier, ScoringEngine, ScoringOptions};
use std::sync::Arc;

fn session(locale: Locale) -> PracticeSession {
    let engine = Arc::new(ScoringEngine::new(ScoringOptions::default()).unwrap());
    PracticeSession::new(engine, locale)
}

#[tokio::test]
async fn test_empty_transcript_cannot_be_submitted() {
    let store = ProgressStore::in_memory(100).unwrap();
    let mut session = session(Locale::En);
    session
        .load_exercise(Exercise::new("greetings", "Good morning"))
        .unwrap();

    let err = session
        .attempt(Arc::new(TranscriptRecognizer::new("")))
        .await
        .unwrap_err();
    assert_eq!(err, PracticeError::Recognition(RecognitionError::NoSpeech));
    assert!(session.result().is_none());

    assert_eq!(session.submit(), Err(PracticeError::IncompleteAttempt));
    assert!(session.submit_to(&store).is_err());
    assert_eq!(history::summary(&store, None).unwrap().total_attempts, 0);
}

#[tokio::test]
async fn test_scored_attempt_is_recorded() {
    let store = ProgressStore::in_memory(100).unwrap();
    let mut session = session(Locale::Es);
    session
        .load_exercise(Exercise::new("numbers", "cat"))
        .unwrap();

    let result = session
        .attempt(Arc::new(TranscriptRecognizer::new("cap")))
        .await
        .unwrap();
    assert_eq!(result.overall_score, 67);
    assert_eq!(result.feedback, FeedbackTier::Good);
    assert_eq!(session.phase(), AttemptPhase::Scored);

    let id = session.submit_to(&store).unwrap();

    let entry = history::get_by_id(&store, id).unwrap().unwrap();
    assert_eq!(entry.record.exercise_id, "numbers");
    assert_eq!(entry.record.score, 67);
    assert_eq!(entry.record.pronunciation_accuracy, 67);
    assert_eq!(entry.record.feedback, "¡Buen trabajo! ¡Sigue practicando!");

    let listed = history::search(&store, &SearchParams::new().with_exercise("numbers")).unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_try_again_discards_result() {
    let mut session = session(Locale::En);
    session
        .load_exercise(Exercise::new("greetings", "hello"))
        .unwrap();
    session
        .attempt(Arc::new(TranscriptRecognizer::new("hello")))
        .await
        .unwrap();

    session.try_again();

    assert!(session.result().is_none());
    assert_eq!(session.submit(), Err(PracticeError::IncompleteAttempt));
}

#[test]
fn test_exercise_without_words_is_unavailable() {
    let mut session = session(Locale::En);
    assert_eq!(
        session.load_exercise(Exercise::new("empty", " ... ")),
        Err(PracticeError::ExerciseUnavailable)
    );
    assert!(session.exercise().is_none());
}

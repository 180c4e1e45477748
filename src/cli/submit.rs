use crate::config::Config;
use crate::db::ProgressStore;
use crate::practice::{Exercise, PracticeError, PracticeSession, ProgressSink};
use crate::recognition::TranscriptRecognizer;
use crate::scoring::{ScoringEngine, ScoringOptions};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use super::args::SubmitCliArgs;
use super::{practice_error, read_transcript};

pub async fn handle_submit_command(args: SubmitCliArgs) -> Result<()> {
    let config = Config::load()?;
    let locale = config.ui.locale;
    let transcript = read_transcript(args.transcript)?;

    let engine = Arc::new(ScoringEngine::new(ScoringOptions::from(&config.scoring))?);
    let mut session = PracticeSession::new(engine, locale);

    session
        .load_exercise(Exercise::new(args.exercise, args.target))
        .map_err(|e| practice_error(e, locale))?;

    match session
        .attempt(Arc::new(TranscriptRecognizer::new(transcript)))
        .await
    {
        Ok(_) => {}
        Err(PracticeError::Recognition(e)) => debug!("Attempt not scored: {}", e),
        Err(e) => return Err(practice_error(e, locale)),
    }

    let record = session.submit().map_err(|e| practice_error(e, locale))?;
    let store = ProgressStore::open(config.storage.max_records)?;
    let id = store.record(&record)?;

    println!(
        "Recorded attempt #{} for {}: {}% - {}",
        id, record.exercise_id, record.score, record.feedback
    );

    Ok(())
}

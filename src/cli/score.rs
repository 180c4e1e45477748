use crate::config::Config;
use crate::practice::{Exercise, Locale, PracticeSession};
use crate::recognition::TranscriptRecognizer;
use crate::scoring::{ScoreResult, ScoringEngine, ScoringOptions};
use anyhow::Result;
use serde_json::json;
use std::sync::Arc;

use super::args::ScoreCliArgs;
use super::{practice_error, read_transcript};

pub async fn handle_score_command(args: ScoreCliArgs) -> Result<()> {
    let config = Config::load()?;
    let locale = args.locale.unwrap_or(config.ui.locale);

    let mut options = ScoringOptions::from(&config.scoring);
    if args.whole_utterance {
        options.word_level_feedback = false;
    }
    if let Some(alignment) = args.alignment {
        options.alignment = alignment;
    }

    let transcript = read_transcript(args.transcript)?;
    let engine = Arc::new(ScoringEngine::new(options)?);
    let mut session = PracticeSession::new(engine, locale);

    session
        .load_exercise(Exercise::new("", args.target))
        .map_err(|e| practice_error(e, locale))?;
    let result = session
        .attempt(Arc::new(TranscriptRecognizer::new(transcript)))
        .await
        .map_err(|e| practice_error(e, locale))?;

    if args.json {
        let mut value = serde_json::to_value(result)?;
        value["message"] = json!(locale.tier_message(result.feedback));
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render_result(result, locale));
    }

    Ok(())
}

/// Human-readable report: score line, feedback message, then one line per target word.
pub fn render_result(result: &ScoreResult, locale: Locale) -> String {
    let mut out = format!(
        "Score: {}% ({})\n{}\n\nWords ({}/{} correct):\n",
        result.overall_score,
        result.feedback.as_str(),
        locale.tier_message(result.feedback),
        result.correct_words(),
        result.word_accuracies.len()
    );

    for word in &result.word_accuracies {
        let mark = if word.correct {
            "correct"
        } else if word.partial {
            "partial"
        } else {
            "missed"
        };
        out.push_str(&format!("  {:<8} {}\n", mark, word.word));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_result_lists_every_target_word() {
        let engine = ScoringEngine::new(ScoringOptions::default()).unwrap();
        let result = engine.score("Good morning everyone", "good marnin");

        let report = render_result(&result, Locale::En);

        assert!(report.starts_with(&format!("Score: {}%", result.overall_score)));
        assert!(report.contains("(1/3 correct)"));
        assert!(report.contains("correct  good"));
        assert!(report.contains("partial  morning"));
        assert!(report.contains("missed   everyone"));
    }

    #[test]
    fn test_render_result_localized_message() {
        let engine = ScoringEngine::new(ScoringOptions::default()).unwrap();
        let result = engine.score("hola", "hola");

        let report = render_result(&result, Locale::Es);
        assert!(report.contains("¡Excelente! ¡Pronunciación perfecta!"));
    }
}

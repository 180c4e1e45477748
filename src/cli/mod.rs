mod args;
mod history;
mod score;
mod submit;

pub use args::{Cli, CliCommand, HistoryCliArgs, ScoreCliArgs, SubmitCliArgs};
pub use history::handle_history_command;
pub use score::{handle_score_command, render_result};
pub use submit::handle_submit_command;

use crate::practice::{Locale, PracticeError};
use anyhow::{anyhow, Context, Result};
use std::io::{self, Read};

/// Use the transcript argument, or read one from stdin.
fn read_transcript(arg: Option<String>) -> Result<String> {
    match arg {
        Some(transcript) => Ok(transcript),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read transcript from stdin")?;
            Ok(buffer)
        }
    }
}

fn practice_error(err: PracticeError, locale: Locale) -> anyhow::Error {
    match locale.error_message(&err) {
        Some(message) => anyhow!("{}", message),
        None => anyhow!(err),
    }
}

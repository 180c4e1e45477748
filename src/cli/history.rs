use crate::config::Config;
use crate::db::ProgressStore;
use crate::history::{self, SearchParams};
use anyhow::Result;

use super::args::HistoryCliArgs;

pub fn handle_history_command(args: HistoryCliArgs) -> Result<()> {
    let config = Config::load()?;
    let store = ProgressStore::open(config.storage.max_records)?;

    if args.summary {
        let summary = history::summary(&store, args.exercise.as_deref())?;
        match args.exercise.as_deref() {
            Some(exercise) => println!("Exercise: {}", exercise),
            None => println!("All exercises"),
        }
        println!("Attempts: {}", summary.total_attempts);
        println!("Average score: {:.2}%", summary.average_score);
        println!(
            "Average pronunciation: {:.2}%",
            summary.average_pronunciation
        );
        return Ok(());
    }

    let params = SearchParams {
        exercise_id: args.exercise,
        from: args.from,
        to: args.to,
        limit: args.limit,
    };
    let entries = history::search(&store, &params)?;

    if entries.is_empty() {
        println!("No attempts found matching your criteria.");
        return Ok(());
    }

    println!("Found {} attempt(s):\n", entries.len());

    for entry in entries {
        println!("ID: {}", entry.id.unwrap_or(0));
        println!(
            "Date: {}",
            entry.completed_at.as_deref().unwrap_or("Unknown")
        );
        println!("Exercise: {}", entry.record.exercise_id);
        println!(
            "Score: {}% (pronunciation {}%)",
            entry.record.score, entry.record.pronunciation_accuracy
        );
        println!("Feedback: {}", entry.record.feedback);
        println!("---");
    }

    println!("\nFor averages, use: pronounce history --summary");

    Ok(())
}

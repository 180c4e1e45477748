use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::practice::Locale;
use crate::scoring::AlignmentStrategy;

#[derive(Parser, Debug)]
#[command(name = "pronounce")]
#[command(about = "Pronunciation practice scoring", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Score a transcript against a target phrase
    Score(ScoreCliArgs),
    /// Score an attempt and record it in the progress history
    Submit(SubmitCliArgs),
    /// List recorded attempts or show summary statistics
    History(HistoryCliArgs),
    /// Run the HTTP API (default when no command is given)
    Serve,
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct ScoreCliArgs {
    /// Phrase the student was asked to say
    #[arg(short, long)]
    pub target: String,
    /// Recognized transcript (read from stdin when omitted)
    #[arg(short = 's', long)]
    pub transcript: Option<String>,
    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
    /// Decide the feedback tier from the overall score only
    #[arg(long)]
    pub whole_utterance: bool,
    /// Word alignment strategy (positional or sequence)
    #[arg(long)]
    pub alignment: Option<AlignmentStrategy>,
    /// Display language for feedback (en or es)
    #[arg(long)]
    pub locale: Option<Locale>,
}

#[derive(ClapArgs, Debug)]
pub struct SubmitCliArgs {
    /// Exercise identifier stored with the attempt
    #[arg(short, long)]
    pub exercise: String,
    /// Exercise content the transcript is scored against
    #[arg(short, long)]
    pub target: String,
    /// Recognized transcript (read from stdin when omitted)
    #[arg(short = 's', long)]
    pub transcript: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct HistoryCliArgs {
    /// Only attempts at this exercise
    #[arg(short, long)]
    pub exercise: Option<String>,
    /// Filter by start date (YYYY-MM-DD format)
    #[arg(long)]
    pub from: Option<String>,
    /// Filter by end date (YYYY-MM-DD format)
    #[arg(long)]
    pub to: Option<String>,
    /// Maximum number of results to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
    /// Show attempt count and average scores instead of the list
    #[arg(long)]
    pub summary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_none() {
        let cli = Cli::try_parse_from(["pronounce"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_score_flags() {
        let cli = Cli::try_parse_from([
            "pronounce",
            "score",
            "--target",
            "Good morning",
            "--transcript",
            "good marnin",
            "--alignment",
            "sequence",
            "--locale",
            "es",
            "--whole-utterance",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Some(CliCommand::Score(args)) => {
                assert_eq!(args.target, "Good morning");
                assert_eq!(args.transcript.as_deref(), Some("good marnin"));
                assert_eq!(args.alignment, Some(AlignmentStrategy::Sequence));
                assert_eq!(args.locale, Some(Locale::Es));
                assert!(args.whole_utterance);
                assert!(args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_alignment() {
        let result = Cli::try_parse_from([
            "pronounce",
            "score",
            "--target",
            "hello",
            "--alignment",
            "fuzzy",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_history_summary() {
        let cli =
            Cli::try_parse_from(["pronounce", "history", "--exercise", "greetings", "--summary"])
                .unwrap();

        match cli.command {
            Some(CliCommand::History(args)) => {
                assert_eq!(args.exercise.as_deref(), Some("greetings"));
                assert!(args.summary);
                assert_eq!(args.limit, 20);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

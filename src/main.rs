use anyhow::Result;
use clap::Parser;
use pronounce::{
    app,
    cli::{
        handle_history_command, handle_score_command, handle_submit_command, Cli, CliCommand,
    },
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(CliCommand::Version) => {
            println!("pronounce {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some(CliCommand::Score(args)) => {
            handle_score_command(args).await?;
            return Ok(());
        }
        Some(CliCommand::Submit(args)) => {
            handle_submit_command(args).await?;
            return Ok(());
        }
        Some(CliCommand::History(args)) => {
            handle_history_command(args)?;
            return Ok(());
        }
        Some(CliCommand::Serve) | None => {}
    }

    app::run_service().await
}

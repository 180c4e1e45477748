use crate::api::ApiServer;
use crate::config::Config;
use crate::db::ProgressStore;
use crate::scoring::{ScoringEngine, ScoringOptions};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

pub async fn run_service() -> Result<()> {
    info!("Starting pronunciation practice service");

    let config = Config::load()?;

    let engine = Arc::new(ScoringEngine::new(ScoringOptions::from(&config.scoring))?);
    info!("Feedback locale: {}", config.ui.locale.as_str());

    let store = Arc::new(ProgressStore::open(config.storage.max_records)?);

    let api_server = ApiServer::new(engine, store, &config);
    let port = api_server.port();
    let server = tokio::spawn(async move {
        if let Err(e) = api_server.start().await {
            error!("API server failed: {}", e);
        }
    });

    info!("Ready. Try: curl -X POST http://127.0.0.1:{}/score -H 'content-type: application/json' -d '{{\"target\":\"Good morning\",\"transcript\":\"good morning\"}}'", port);

    tokio::select! {
        _ = server => {}
        _ = tokio::signal::ctrl_c() => info!("Shutting down"),
    }

    Ok(())
}

//! REST API server for pronunciation practice.
//!
//! Provides HTTP endpoints for:
//! - Scoring a transcript against a target phrase
//! - Submitting attempts to the progress store
//! - Progress history and summary statistics

pub mod error;
pub mod routes;

use crate::config::Config;
use crate::db::ProgressStore;
use crate::practice::Locale;
use crate::scoring::ScoringEngine;
use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScoringEngine>,
    pub store: Arc<ProgressStore>,
    /// Used when a request does not name its own locale
    pub locale: Locale,
}

pub struct ApiServer {
    port: u16,
    state: AppState,
}

impl ApiServer {
    pub fn new(engine: Arc<ScoringEngine>, store: Arc<ProgressStore>, config: &Config) -> Self {
        Self {
            port: config.api.port,
            state: AppState {
                engine,
                store,
                locale: config.ui.locale,
            },
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn start(self) -> Result<()> {
        let app = router(self.state);

        let listener = tokio::net::TcpListener::bind(&format!("127.0.0.1:{}", self.port)).await?;

        info!("API server listening on http://127.0.0.1:{}", self.port);
        info!("Endpoints:");
        info!("  GET  /                  - Service info");
        info!("  GET  /version           - Get version info");
        info!("  POST /score             - Score a transcript");
        info!("  POST /progress          - Score and record an attempt");
        info!("  GET  /progress          - List recorded attempts");
        info!("  GET  /progress/summary  - Attempt count and averages");
        info!("  GET  /progress/:id      - Get a single attempt");

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/version", get(version))
        .merge(routes::scoring::router(state.clone()))
        .nest("/progress", routes::progress::router(state))
        .layer(ServiceBuilder::new())
}

async fn status() -> Json<Value> {
    Json(json!({
        "service": "pronounce",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn version() -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "name": "pronounce"
    }))
}

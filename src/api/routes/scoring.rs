//! Scoring endpoint.

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::practice::{Exercise, Locale, PracticeSession};
use crate::recognition::TranscriptRecognizer;
use crate::scoring::{ScoreResult, Severity};
use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Request body for POST /score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    /// Phrase the student was asked to say
    pub target: String,
    /// What the recognizer heard
    pub transcript: String,
    /// Overrides the configured display language
    #[serde(default)]
    pub locale: Option<Locale>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub message: String,
    pub severity: Severity,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/score", post(score))
        .with_state(state)
}

/// POST /score - Score one transcript against a target phrase.
pub async fn score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> ApiResult<Json<ScoreResponse>> {
    let locale = req.locale.unwrap_or(state.locale);
    let mut session = PracticeSession::new(state.engine.clone(), locale);

    session
        .load_exercise(Exercise::new("", req.target))
        .map_err(|e| ApiError::practice(e, locale))?;

    let result = session
        .attempt(Arc::new(TranscriptRecognizer::new(req.transcript)))
        .await
        .map_err(|e| ApiError::practice(e, locale))?
        .clone();

    Ok(Json(ScoreResponse {
        message: locale.tier_message(result.feedback).to_string(),
        severity: result.feedback.severity(),
        result,
    }))
}

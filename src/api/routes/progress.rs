//! Progress API routes.
//!
//! Submitting an attempt scores it and stores the result; the read routes
//! back the practice dashboard.

use crate::api::error::{ApiError, ApiResult};
use crate::api::AppState;
use crate::db::{ProgressEntry, ProgressSummary};
use crate::history::{self, SearchParams};
use crate::practice::{Exercise, Locale, PracticeError, PracticeSession, ProgressSink};
use crate::recognition::TranscriptRecognizer;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Request body for POST /progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub exercise_id: String,
    /// Exercise content the transcript is scored against
    pub target: String,
    pub transcript: String,
    #[serde(default)]
    pub locale: Option<Locale>,
}

/// Query parameters for progress listing.
#[derive(Debug, Deserialize, Default)]
pub struct ProgressQueryParams {
    pub exercise_id: Option<String>,
    /// Start date (YYYY-MM-DD)
    pub from: Option<String>,
    /// End date (YYYY-MM-DD)
    pub to: Option<String>,
    /// Maximum results (default 20)
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SummaryQueryParams {
    pub exercise_id: Option<String>,
}

/// Create the progress router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_progress).post(submit_progress))
        .route("/summary", get(progress_summary))
        .route("/:id", get(get_progress_by_id))
        .with_state(state)
}

/// POST /progress - Score a transcript and record the attempt.
async fn submit_progress(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> ApiResult<(StatusCode, Json<ProgressEntry>)> {
    let locale = req.locale.unwrap_or(state.locale);
    let mut session = PracticeSession::new(state.engine.clone(), locale);

    session
        .load_exercise(Exercise::new(req.exercise_id, req.target))
        .map_err(|e| ApiError::practice(e, locale))?;

    // A failed recognition leaves the attempt unscored; submit rejects it below.
    match session
        .attempt(Arc::new(TranscriptRecognizer::new(req.transcript)))
        .await
    {
        Ok(_) => {}
        Err(PracticeError::Recognition(e)) => debug!("Attempt not scored: {}", e),
        Err(e) => return Err(ApiError::practice(e, locale)),
    }

    let record = session
        .submit()
        .map_err(|e| ApiError::practice(e, locale))?;
    let id = state.store.record(&record)?;

    info!(
        "Recorded attempt {} for exercise {} ({}%)",
        id, record.exercise_id, record.score
    );

    let entry = history::get_by_id(&state.store, id)?
        .ok_or_else(|| ApiError::internal(format!("Attempt {} was not stored", id)))?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /progress - List recorded attempts, newest first.
async fn list_progress(
    State(state): State<AppState>,
    Query(params): Query<ProgressQueryParams>,
) -> ApiResult<Json<Vec<ProgressEntry>>> {
    let search_params = SearchParams {
        exercise_id: params.exercise_id,
        from: params.from,
        to: params.to,
        limit: params.limit.unwrap_or(20),
    };

    let entries = history::search(&state.store, &search_params)?;
    Ok(Json(entries))
}

/// GET /progress/summary - Attempt count and average scores.
async fn progress_summary(
    State(state): State<AppState>,
    Query(params): Query<SummaryQueryParams>,
) -> ApiResult<Json<ProgressSummary>> {
    let summary = history::summary(&state.store, params.exercise_id.as_deref())?;
    Ok(Json(summary))
}

/// GET /progress/:id - Get a single attempt.
async fn get_progress_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ProgressEntry>> {
    let entry = history::get_by_id(&state.store, id)?
        .ok_or_else(|| ApiError::not_found(format!("Attempt {} not found", id)))?;

    Ok(Json(entry))
}

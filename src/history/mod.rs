//! History module for submitted practice attempts.
//!
//! This module provides the core business logic for listing and summarizing
//! progress. It is used by both the CLI and REST API.

use crate::db::{self, ProgressEntry, ProgressStore, ProgressSummary};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Parameters for searching progress history.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SearchParams {
    /// Only attempts at this exercise
    pub exercise_id: Option<String>,
    /// Filter by start date (YYYY-MM-DD format)
    pub from: Option<String>,
    /// Filter by end date (YYYY-MM-DD format)
    pub to: Option<String>,
    /// Maximum number of results
    pub limit: usize,
}

impl SearchParams {
    pub fn new() -> Self {
        Self {
            limit: 20,
            ..Default::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_exercise(mut self, exercise_id: impl Into<String>) -> Self {
        self.exercise_id = Some(exercise_id.into());
        self
    }

    pub fn with_date_range(mut self, from: Option<String>, to: Option<String>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Returns true if no filters are specified (only limit)
    pub fn has_filters(&self) -> bool {
        self.exercise_id.is_some() || self.from.is_some() || self.to.is_some()
    }
}

/// Search progress history with optional filters.
///
/// If no filters are specified, returns the most recent attempts.
pub fn search(store: &ProgressStore, params: &SearchParams) -> Result<Vec<ProgressEntry>> {
    store.with_conn(|conn| {
        if params.has_filters() {
            db::search_progress(
                conn,
                params.exercise_id.as_deref(),
                params.from.as_deref(),
                params.to.as_deref(),
                params.limit,
            )
        } else {
            db::get_recent_progress(conn, params.limit)
        }
    })
}

pub fn get_by_id(store: &ProgressStore, id: i64) -> Result<Option<ProgressEntry>> {
    store.with_conn(|conn| db::get_progress_by_id(conn, id))
}

/// Attempt count and average scores, overall or for one exercise.
pub fn summary(store: &ProgressStore, exercise_id: Option<&str>) -> Result<ProgressSummary> {
    store.with_conn(|conn| db::progress_summary(conn, exercise_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::{ProgressRecord, ProgressSink};

    fn record(exercise_id: &str, score: u8) -> ProgressRecord {
        ProgressRecord {
            exercise_id: exercise_id.to_string(),
            score,
            pronunciation_accuracy: score,
            feedback: String::new(),
        }
    }

    #[test]
    fn test_search_params_has_filters() {
        let params = SearchParams::new();
        assert!(!params.has_filters());

        let params = SearchParams::new().with_exercise("greetings");
        assert!(params.has_filters());

        let params = SearchParams::new().with_date_range(Some("2024-01-01".into()), None);
        assert!(params.has_filters());
    }

    #[test]
    fn test_search_params_builder() {
        let params = SearchParams::new()
            .with_limit(50)
            .with_exercise("greetings")
            .with_date_range(Some("2024-01-01".into()), Some("2024-12-31".into()));

        assert_eq!(params.limit, 50);
        assert_eq!(params.exercise_id, Some("greetings".to_string()));
        assert_eq!(params.from, Some("2024-01-01".to_string()));
        assert_eq!(params.to, Some("2024-12-31".to_string()));
    }

    #[test]
    fn test_search_and_summary_through_store() {
        let store = ProgressStore::in_memory(100).unwrap();
        let first = store.record(&record("greetings", 90)).unwrap();
        store.record(&record("numbers", 30)).unwrap();

        let all = search(&store, &SearchParams::new()).unwrap();
        assert_eq!(all.len(), 2);

        let greetings = search(&store, &SearchParams::new().with_exercise("greetings")).unwrap();
        assert_eq!(greetings.len(), 1);
        assert_eq!(greetings[0].id, Some(first));

        assert_eq!(
            get_by_id(&store, first).unwrap().map(|e| e.record.score),
            Some(90)
        );

        let stats = summary(&store, None).unwrap();
        assert_eq!(stats.total_attempts, 2);
        assert_eq!(stats.average_score, 60.0);
    }
}

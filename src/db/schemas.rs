use serde::{Deserialize, Serialize};

use crate::practice::ProgressRecord;

/// A submitted attempt as stored in the `progress` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub record: ProgressRecord,
    pub completed_at: Option<String>,
}

impl ProgressEntry {
    pub fn new(record: ProgressRecord) -> Self {
        ProgressEntry {
            id: None,
            record,
            completed_at: None,
        }
    }

    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProgressEntry> {
        Ok(ProgressEntry {
            id: Some(row.get(0)?),
            record: ProgressRecord {
                exercise_id: row.get(1)?,
                score: row.get(2)?,
                pronunciation_accuracy: row.get(3)?,
                feedback: row.get(4)?,
            },
            completed_at: Some(row.get(5)?),
        })
    }
}

/// Aggregate statistics over stored attempts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub total_attempts: i64,
    pub average_score: f64,
    pub average_pronunciation: f64,
}

pub(crate) const PROGRESS_COLUMNS: &str =
    "id, exercise_id, score, pronunciation_accuracy, feedback, completed_at";

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::Connection;

use super::schemas::{ProgressEntry, ProgressSummary, PROGRESS_COLUMNS};
use crate::practice::ProgressRecord;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn insert_progress(conn: &Connection, record: &ProgressRecord) -> Result<i64> {
    insert_progress_at(conn, record, Utc::now())
}

pub fn insert_progress_at(
    conn: &Connection,
    record: &ProgressRecord,
    completed_at: DateTime<Utc>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO progress (exercise_id, score, pronunciation_accuracy, feedback, completed_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            record.exercise_id,
            record.score,
            record.pronunciation_accuracy,
            record.feedback,
            completed_at.format(TIMESTAMP_FORMAT).to_string(),
        ],
    )
    .context("Failed to insert progress")?;

    Ok(conn.last_insert_rowid())
}

pub fn get_recent_progress(conn: &Connection, limit: usize) -> Result<Vec<ProgressEntry>> {
    search_progress(conn, None, None, None, limit)
}

pub fn get_progress_by_id(conn: &Connection, id: i64) -> Result<Option<ProgressEntry>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {PROGRESS_COLUMNS} FROM progress WHERE id = ?1"))
        .context("Failed to prepare query")?;

    let mut rows = stmt
        .query_map([id], ProgressEntry::from_row)
        .context("Failed to query progress")?;

    let entry = rows
        .next()
        .transpose()
        .context("Failed to map progress row")?;

    Ok(entry)
}

pub fn count_progress(conn: &Connection) -> Result<i64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM progress", [], |row| row.get(0))
        .context("Failed to count progress")?;

    Ok(count)
}

pub fn prune_old_progress(conn: &Connection, max_count: i64) -> Result<usize> {
    let count = count_progress(conn)?;

    if count <= max_count {
        return Ok(0);
    }

    let to_delete = count - max_count;

    let deleted = conn
        .execute(
            "DELETE FROM progress WHERE id IN (
                SELECT id FROM progress ORDER BY completed_at ASC, id ASC LIMIT ?1
            )",
            [to_delete],
        )
        .context("Failed to prune old progress")?;

    Ok(deleted)
}

pub fn search_progress(
    conn: &Connection,
    exercise_id: Option<&str>,
    date_from: Option<&str>,
    date_to: Option<&str>,
    limit: usize,
) -> Result<Vec<ProgressEntry>> {
    let mut sql = format!("SELECT {PROGRESS_COLUMNS} FROM progress WHERE 1=1");
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if let Some(exercise) = exercise_id {
        sql.push_str(" AND exercise_id = ?");
        params.push(Box::new(exercise.to_string()));
    }

    if let Some(from) = date_from {
        sql.push_str(" AND completed_at >= ?");
        params.push(Box::new(from.to_string()));
    }

    if let Some(to) = date_to {
        // Dates without a time cover the whole day
        sql.push_str(" AND date(completed_at) <= date(?)");
        params.push(Box::new(to.to_string()));
    }

    sql.push_str(" ORDER BY completed_at DESC, id DESC LIMIT ?");
    params.push(Box::new(i64::try_from(limit).unwrap_or(i64::MAX)));

    let mut stmt = conn
        .prepare(&sql)
        .context("Failed to prepare search query")?;

    let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

    let entries = stmt
        .query_map(param_refs.as_slice(), ProgressEntry::from_row)
        .context("Failed to execute search query")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to map search results")?;

    Ok(entries)
}

pub fn progress_summary(conn: &Connection, exercise_id: Option<&str>) -> Result<ProgressSummary> {
    let (total_attempts, average_score, average_pronunciation): (i64, Option<f64>, Option<f64>) =
        conn.query_row(
            "SELECT COUNT(*), AVG(score), AVG(pronunciation_accuracy) FROM progress
             WHERE ?1 IS NULL OR exercise_id = ?1",
            [exercise_id],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .context("Failed to summarize progress")?;

    Ok(ProgressSummary {
        total_attempts,
        average_score: round2(average_score.unwrap_or(0.0)),
        average_pronunciation: round2(average_pronunciation.unwrap_or(0.0)),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn init_db() -> Result<Connection> {
    let db_path = crate::global::db_file()?;

    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create database directory")?;
    }

    let conn = Connection::open(&db_path).context("Failed to open database connection")?;

    migrate(&conn)?;

    Ok(conn)
}

pub fn migrate(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS progress (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            exercise_id TEXT NOT NULL,
            score INTEGER NOT NULL CHECK (score BETWEEN 0 AND 100),
            pronunciation_accuracy INTEGER NOT NULL CHECK (pronunciation_accuracy BETWEEN 0 AND 100),
            feedback TEXT NOT NULL DEFAULT '',
            completed_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create progress table")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_progress_completed_at ON progress(completed_at DESC)",
        [],
    )
    .context("Failed to create index on completed_at")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_progress_exercise_id ON progress(exercise_id)",
        [],
    )
    .context("Failed to create index on exercise_id")?;

    Ok(())
}

use anyhow::{anyhow, Result};
use rusqlite::Connection;
use std::sync::Mutex;
use tracing::{debug, info};

use super::init::{init_db, migrate};
use super::operations::{insert_progress, prune_old_progress};
use crate::practice::{ProgressRecord, ProgressSink};

/// SQLite-backed progress store shared by the CLI and the API server.
pub struct ProgressStore {
    conn: Mutex<Connection>,
    max_records: i64,
}

impl ProgressStore {
    /// Open the store in the application data directory.
    pub fn open(max_records: i64) -> Result<Self> {
        let conn = init_db()?;
        Ok(Self::new(conn, max_records))
    }

    pub fn in_memory(max_records: i64) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        migrate(&conn)?;
        Ok(Self::new(conn, max_records))
    }

    pub fn new(conn: Connection, max_records: i64) -> Self {
        Self {
            conn: Mutex::new(conn),
            max_records,
        }
    }

    pub fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| anyhow!("Progress store lock poisoned"))?;
        f(&conn)
    }
}

impl ProgressSink for ProgressStore {
    fn record(&self, record: &ProgressRecord) -> Result<i64> {
        self.with_conn(|conn| {
            let id = insert_progress(conn, record)?;
            info!(
                "Saved progress #{} for exercise {} (score {})",
                id, record.exercise_id, record.score
            );

            // A cap below one would delete the row just written
            if self.max_records > 0 {
                let pruned = prune_old_progress(conn, self.max_records)?;
                if pruned > 0 {
                    debug!("Pruned {} old progress records", pruned);
                }
            }

            Ok(id)
        })
    }
}

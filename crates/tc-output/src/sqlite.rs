//! SQLite output backend (feature `sqlite`).
//!
//! Creates `events.db` in the configured output directory with a single
//! `events` table.

use std::path::Path;

use rusqlite::Connection;

use tc_control::EventRecord;

use crate::OutputResult;
use crate::row::EventRow;
use crate::writer::EventWriter;

/// File name created by [`SqliteEventWriter::new`].
pub const EVENTS_DB: &str = "events.db";

/// Writes car events to an SQLite database.
pub struct SqliteEventWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteEventWriter {
    /// Open (or create) `events.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(EVENTS_DB))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 time_secs REAL    NOT NULL,
                 car_id    INTEGER NOT NULL,
                 origin    TEXT    NOT NULL,
                 target    TEXT    NOT NULL,
                 event     TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl EventWriter for SqliteEventWriter {
    fn write_event(&mut self, record: &EventRecord) -> OutputResult<()> {
        let row = EventRow::from(record);
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO events (time_secs, car_id, origin, target, event) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        stmt.execute(rusqlite::params![
            row.time_secs,
            row.car_id,
            row.origin,
            row.target,
            row.event,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

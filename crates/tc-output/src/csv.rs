//! CSV output backend.
//!
//! One row per event in `events.csv`:
//! `time_secs,car_id,origin,target,event`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use tc_control::EventRecord;

use crate::row::EventRow;
use crate::writer::EventWriter;
use crate::{OutputError, OutputResult};

/// File name created by [`CsvEventWriter::new`].
pub const EVENTS_FILE: &str = "events.csv";

const HEADER: [&str; 5] = ["time_secs", "car_id", "origin", "target", "event"];

/// Writes car events as CSV rows.
pub struct CsvEventWriter<W: Write = File> {
    events:   Writer<W>,
    finished: bool,
}

impl CsvEventWriter<File> {
    /// Create (or truncate) `events.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(dir.join(EVENTS_FILE))?)
    }
}

impl<W: Write> CsvEventWriter<W> {
    /// Write CSV to any destination, starting with the header row.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut events = Writer::from_writer(out);
        events.write_record(HEADER)?;
        Ok(Self { events, finished: false })
    }

    /// Flush and return the destination.
    pub fn into_inner(self) -> OutputResult<W> {
        self.events
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write + Send> EventWriter for CsvEventWriter<W> {
    fn write_event(&mut self, record: &EventRecord) -> OutputResult<()> {
        let row = EventRow::from(record);
        self.events.write_record(&[
            format!("{:.3}", row.time_secs),
            row.car_id.to_string(),
            row.origin.to_owned(),
            row.target.to_owned(),
            row.event.to_owned(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        Ok(())
    }
}

//! Human-readable narration.

use std::io::{self, Stdout, Write};

use tc_control::EventRecord;

use crate::OutputResult;
use crate::sink::WriterSink;
use crate::writer::EventWriter;

/// A console narrator shared between car threads.
pub type ConsoleSink<W = Stdout> = WriterSink<ConsoleWriter<W>>;

impl ConsoleSink<Stdout> {
    /// Narrate arrivals, crossings, and exits to standard output.
    pub fn stdout() -> Self {
        WriterSink::new(ConsoleWriter::new(io::stdout()))
    }
}

/// Writes one line per event:
///
/// ```text
/// Time 1.1: Car 1 (^ ^) arriving
/// ```
///
/// Only `arriving`, `crossing`, and `exiting` are written unless the writer
/// is verbose.
pub struct ConsoleWriter<W: Write> {
    out:     W,
    verbose: bool,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, verbose: false }
    }

    /// Also write `queued`, `admitted`, `cleared`, and `exited`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> EventWriter for ConsoleWriter<W> {
    fn write_event(&mut self, record: &EventRecord) -> OutputResult<()> {
        if !self.verbose && !record.event.is_narrated() {
            return Ok(());
        }
        writeln!(
            self.out,
            "Time {:.1}: {} ({} {}) {}",
            record.time_secs,
            record.car,
            record.origin.glyph(),
            record.target.glyph(),
            record.event,
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

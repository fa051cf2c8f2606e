//! `WriterSink<W>` — bridges `EventSink` to an `EventWriter`.

use parking_lot::Mutex;

use tc_control::{EventRecord, EventSink};

use crate::writer::EventWriter;
use crate::{OutputError, OutputResult};

/// An [`EventSink`] that forwards every record to any [`EventWriter`]
/// backend (console, CSV, SQLite, …).
///
/// Car threads record concurrently, so the writer sits behind a lock and
/// lines never interleave.  Errors from the writer are stored because
/// `EventSink` methods have no return value; after the run, check with
/// [`take_error`][Self::take_error].
pub struct WriterSink<W: EventWriter> {
    state: Mutex<SinkState<W>>,
}

struct SinkState<W> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W> SinkState<W> {
    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: EventWriter> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { state: Mutex::new(SinkState { writer, last_error: None }) }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&self) -> Option<OutputError> {
        self.state.lock().last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect its output after the run).
    pub fn into_writer(self) -> W {
        self.state.into_inner().writer
    }
}

impl<W: EventWriter> EventSink for WriterSink<W> {
    fn record(&self, event: &EventRecord) {
        let mut state = self.state.lock();
        let result = state.writer.write_event(event);
        state.store_err(result);
    }

    fn finish(&self) {
        let mut state = self.state.lock();
        let result = state.writer.finish();
        state.store_err(result);
    }
}

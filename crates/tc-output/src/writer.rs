//! The `EventWriter` trait implemented by all fallible backends.

use tc_control::EventRecord;

use crate::OutputResult;

/// Trait implemented by the console, CSV, and SQLite writers.
///
/// Writers are single-owner (`&mut self`); [`WriterSink`][crate::WriterSink]
/// puts one behind a lock and keeps the first error it returns.
pub trait EventWriter: Send {
    /// Write one event.
    fn write_event(&mut self, record: &EventRecord) -> OutputResult<()>;

    /// Flush and close the underlying handle.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

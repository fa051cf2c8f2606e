//! `tc-output` — event sinks that narrate or persist car passages.
//!
//! | Feature   | Backend  | Destination                        |
//! |-----------|----------|------------------------------------|
//! | *(none)*  | Console  | any `io::Write` (stdout by default)|
//! | *(none)*  | CSV      | `events.csv`                       |
//! | *(none)*  | Memory   | `Vec<EventRecord>`                 |
//! | `sqlite`  | SQLite   | `events.db`, table `events`        |
//!
//! Fallible backends implement [`EventWriter`] and are shared between car
//! threads through [`WriterSink`], which implements
//! `tc_control::EventSink`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tc_output::{ConsoleSink, CsvEventWriter, WriterSink};
//!
//! let csv = WriterSink::new(CsvEventWriter::new(Path::new("./out"))?);
//! let controller = ControllerBuilder::new(timing)
//!     .sink((ConsoleSink::stdout(), &csv))
//!     .build()?;
//! run_schedule(&controller, &schedule)?;
//! csv.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod memory;
pub mod row;
pub mod sink;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use console::{ConsoleSink, ConsoleWriter};
pub use csv::CsvEventWriter;
pub use error::{OutputError, OutputResult};
pub use memory::MemorySink;
pub use row::EventRow;
pub use sink::WriterSink;
pub use writer::EventWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteEventWriter;

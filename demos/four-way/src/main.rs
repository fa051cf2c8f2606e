//! four-way — drive the four-way stop controller from the command line.
//!
//! Narration goes to stdout; diagnostics go to stderr through `tracing`
//! (`RUST_LOG=debug` shows every phase transition).

mod cli;

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tc_control::{ControllerBuilder, RunReport, run_schedule};
use tc_core::TimingConfig;
use tc_output::{ConsoleWriter, CsvEventWriter, EventWriter, WriterSink};
use tc_schedule::{Schedule, generate_schedule, load_schedule_csv};

use cli::Cli;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let timing = load_timing(&cli)?;
    let schedule = load_schedule(&cli)?;
    info!(
        cars = schedule.len(),
        time_scale = timing.time_scale,
        "schedule ready"
    );

    // ── Sinks ─────────────────────────────────────────────────────────────
    let console = WriterSink::new(ConsoleWriter::new(io::stdout()).verbose(cli.verbose));
    let csv = cli
        .csv
        .as_deref()
        .map(|dir| open_writer(dir, CsvEventWriter::new))
        .transpose()?;
    #[cfg(feature = "sqlite")]
    let sqlite = cli
        .sqlite
        .as_deref()
        .map(|dir| open_writer(dir, tc_output::SqliteEventWriter::new))
        .transpose()?;
    #[cfg(not(feature = "sqlite"))]
    let sqlite: Option<WriterSink<CsvEventWriter>> = None;

    // ── Run ───────────────────────────────────────────────────────────────
    let controller = ControllerBuilder::new(timing)
        .sink((&console, (csv.as_ref(), sqlite.as_ref())))
        .build()
        .context("invalid timing configuration")?;
    let report = run_schedule(&controller, &schedule)?;

    report_output_error("console", console.take_error());
    if let Some(csv) = &csv {
        report_output_error("csv", csv.take_error());
    }
    if let Some(sqlite) = &sqlite {
        report_output_error("sqlite", sqlite.take_error());
    }

    print_summary(&report);

    if cli.verify {
        let violations = report.violations();
        if !violations.is_empty() {
            for v in &violations {
                eprintln!("violation: {v}");
            }
            return Ok(ExitCode::FAILURE);
        }
        println!("verify: no violations");
    }
    Ok(ExitCode::SUCCESS)
}

// ── Inputs ────────────────────────────────────────────────────────────────────

fn load_timing(cli: &Cli) -> Result<TimingConfig> {
    let mut timing = match &cli.timing {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening timing file {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing timing file {}", path.display()))?
        }
        None => TimingConfig::default(),
    };
    if let Some(scale) = cli.time_scale {
        timing.time_scale = scale;
    }
    Ok(timing)
}

fn load_schedule(cli: &Cli) -> Result<Schedule> {
    if let Some(path) = &cli.schedule {
        return load_schedule_csv(path)
            .with_context(|| format!("loading schedule {}", path.display()));
    }
    if let Some(count) = cli.random {
        return generate_schedule(count, cli.seed, cli.mean_gap)
            .context("generating random schedule");
    }
    Ok(Schedule::reference())
}

/// Create `dir` if needed and open a writer in it.
fn open_writer<W, F>(dir: &Path, open: F) -> Result<WriterSink<W>>
where
    W: EventWriter,
    F: FnOnce(&Path) -> tc_output::OutputResult<W>,
{
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;
    let writer = open(dir)
        .with_context(|| format!("opening output in {}", dir.display()))?;
    Ok(WriterSink::new(writer))
}

// ── Output ────────────────────────────────────────────────────────────────────

fn report_output_error(backend: &str, error: Option<tc_output::OutputError>) {
    if let Some(e) = error {
        warn!(backend, error = %e, "output incomplete");
    }
}

fn print_summary(report: &RunReport) {
    let longest_wait = report
        .cars
        .iter()
        .max_by(|a, b| a.wait_secs().total_cmp(&b.wait_secs()));

    println!();
    println!("Cars:      {}", report.cars.len());
    println!("Makespan:  {:.1} s", report.makespan_secs());
    if let Some(car) = longest_wait {
        println!("Longest wait: {} ({:.1} s)", car.car, car.wait_secs());
    }
}

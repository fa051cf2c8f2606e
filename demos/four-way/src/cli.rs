//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Four-way stop intersection simulator.
///
/// Without arguments, runs the eight-car reference scenario in real time.
#[derive(Parser, Debug)]
#[command(name = "four-way")]
#[command(about = "Simulate cars crossing a four-way stop, one thread per car")]
pub struct Cli {
    /// Arrival schedule CSV (`car_id,arrival_secs,origin,target`)
    #[arg(long, value_name = "FILE", conflicts_with = "random")]
    pub schedule: Option<PathBuf>,

    /// Generate N random cars instead of the reference scenario
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Mean simulated seconds between random arrivals
    #[arg(long, value_name = "SECS", default_value_t = 1.5)]
    pub mean_gap: f64,

    /// Timing configuration JSON (missing fields keep their defaults)
    #[arg(long, value_name = "FILE")]
    pub timing: Option<PathBuf>,

    /// Wall seconds per simulated second (overrides the timing file)
    #[arg(long, value_name = "X")]
    pub time_scale: Option<f64>,

    /// Also write `events.csv` into this directory
    #[arg(long, value_name = "DIR")]
    pub csv: Option<PathBuf>,

    /// Also write `events.db` into this directory
    #[cfg(feature = "sqlite")]
    #[arg(long, value_name = "DIR")]
    pub sqlite: Option<PathBuf>,

    /// Narrate every milestone, not just arrive/cross/exit
    #[arg(long, short)]
    pub verbose: bool,

    /// Check the run for exclusion and ordering violations; exit non-zero
    /// if any are found
    #[arg(long)]
    pub verify: bool,
}

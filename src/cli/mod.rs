//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::Parser;
use types::format::ReportFormat;

/// Default report path, relative to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "nba_teams.txt";

/// Collect NBA team rosters and write them to a report file.
///
/// Fetches teams and players concurrently, groups players under their team
/// code and renders one block per team. Fetch or write failures are logged
/// and never abort the run.
#[derive(Debug, Parser)]
#[clap(name = "nba-rosters", version)]
pub struct Rosters {
    /// API host (or set `NBA_ROSTERS_BASE_URL` env var).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Where to write the report.
    #[clap(long, short, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Report layout.
    #[clap(long, short, default_value_t = ReportFormat::default())]
    pub format: ReportFormat,

    /// Per-request timeout in seconds. Requests never time out when unset.
    #[clap(long)]
    pub timeout_secs: Option<u64>,

    /// Log fetch details at debug level.
    #[clap(long, short)]
    pub verbose: bool,
}

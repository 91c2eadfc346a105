//! Report output formats.

use clap::ValueEnum;
use std::fmt;

/// How the roster report is laid out on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Fixed-width text blocks, one per team.
    #[default]
    Text,
    /// Pretty-printed JSON array of rosters.
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

//! NBA Roster Collector Library
//!
//! Fetches team and player records from the FantasyBasketballNerd XML
//! service, groups players under their teams and writes a roster report.
//!
//! ## Features
//!
//! - **Concurrent Retrieval**: teams and players are fetched in parallel tasks
//! - **Lossy Error Policy**: fetch and write failures are logged, never fatal
//! - **Roster Join**: players are matched to teams by team code, in fetch order
//! - **Report Formats**: fixed-width text (default) or JSON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_rosters::commands::collect_rosters::{handle_collect_rosters, CollectParams};
//!
//! # async fn example() -> nba_rosters::Result<()> {
//! let rosters = handle_collect_rosters(CollectParams::default()).await?;
//! println!("{} teams written to nba_teams.txt", rosters.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the collector at a different host (a mirror, or a local mock):
//! ```bash
//! export NBA_ROSTERS_BASE_URL=http://localhost:8080
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nerd;
pub mod report;

// Re-export commonly used types
pub use cli::types::{
    format::ReportFormat,
    ids::{PlayerId, TeamCode},
};
pub use crate::core::Roster;
pub use error::{Result, RosterError};
pub use nerd::types::{Player, Team};

pub const BASE_URL_ENV_VAR: &str = "NBA_ROSTERS_BASE_URL";

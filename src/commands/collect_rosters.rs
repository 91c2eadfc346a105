//! Roster collection command implementation

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use tokio::task::JoinError;
use tracing::{debug, error, info};

use crate::{
    cli::types::format::ReportFormat,
    core::{build_client, build_rosters, Roster},
    nerd::http::{get_players, get_teams},
    report::write_report,
    Result, RosterError,
};

use super::resolve_base_url;

/// Configuration for a collection run.
///
/// # Examples
///
/// ```rust
/// use nba_rosters::{commands::collect_rosters::CollectParams, ReportFormat};
///
/// let params = CollectParams {
///     base_url: None, // falls back to NBA_ROSTERS_BASE_URL, then the public host
///     output: "nba_teams.txt".into(),
///     format: ReportFormat::Text,
///     timeout: None,
/// };
/// assert!(params.timeout.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CollectParams {
    pub base_url: Option<String>,
    pub output: PathBuf,
    pub format: ReportFormat,
    pub timeout: Option<Duration>,
}

impl Default for CollectParams {
    fn default() -> Self {
        Self {
            base_url: None,
            output: PathBuf::from(crate::cli::DEFAULT_REPORT_PATH),
            format: ReportFormat::default(),
            timeout: None,
        }
    }
}

/// Fetch teams and players concurrently, join them and write the report.
///
/// Fetch and write failures are logged and swallowed: a failed fetch counts
/// as an empty list, a failed write leaves no report. Only failing to build
/// the HTTP client is returned as an error. The rosters are returned so
/// callers can inspect what was written.
pub async fn handle_collect_rosters(params: CollectParams) -> Result<Vec<Roster>> {
    let started = Instant::now();
    info!("NBA Data Collection - NBA API");

    let base_url = resolve_base_url(params.base_url);
    let client = build_client(params.timeout)?;
    debug!(%base_url, "fetching teams and players");

    let teams_task = tokio::spawn({
        let client = client.clone();
        let base_url = base_url.clone();
        async move { get_teams(&client, &base_url).await }
    });
    let players_task = tokio::spawn(async move { get_players(&client, &base_url).await });

    let (teams, players) = tokio::join!(teams_task, players_task);
    let teams = or_empty("teams", teams);
    let players = or_empty("players", players);
    info!(teams = teams.len(), players = players.len(), "fetch complete");

    let rosters = build_rosters(&teams, &players);

    match write_report(&params.output, &rosters, params.format) {
        Ok(()) => info!(path = %params.output.display(), format = %params.format, "report written"),
        Err(e) => error!(path = %params.output.display(), error = %e, "could not write report"),
    }

    info!("Took {:?}", started.elapsed());
    Ok(rosters)
}

/// Collapse a fetch task outcome, logging and substituting an empty list on
/// any failure.
fn or_empty<T>(
    resource: &str,
    outcome: std::result::Result<Result<Vec<T>>, JoinError>,
) -> Vec<T> {
    match outcome.map_err(RosterError::from).and_then(|fetched| fetched) {
        Ok(records) => records,
        Err(e) => {
            error!(resource, error = %e, "fetch failed, continuing without records");
            Vec::new()
        }
    }
}

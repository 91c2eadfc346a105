//! Endpoint URLs and fetch-and-decode for teams and players.

use reqwest::Client;
use tracing::debug;

use crate::{
    nerd::types::{Player, PlayersEnvelope, Team, TeamsEnvelope},
    Result,
};


/// Public FantasyBasketballNerd host.
pub const NERD_BASE_URL: &str = "https://www.fantasybasketballnerd.com";

pub fn teams_url(base_url: &str) -> String {
    format!("{}/service/teams", base_url.trim_end_matches('/'))
}

pub fn players_url(base_url: &str) -> String {
    format!("{}/service/players", base_url.trim_end_matches('/'))
}

/// Decode a `/service/teams` body into its team records.
pub fn decode_teams(body: &str) -> Result<Vec<Team>> {
    let envelope: TeamsEnvelope = quick_xml::de::from_str(body)?;
    Ok(envelope.teams)
}

/// Decode a `/service/players` body into its player records.
pub fn decode_players(body: &str) -> Result<Vec<Player>> {
    let envelope: PlayersEnvelope = quick_xml::de::from_str(body)?;
    Ok(envelope.players)
}

/// Fetch every team, in service order.
pub async fn get_teams(client: &Client, base_url: &str) -> Result<Vec<Team>> {
    let body = get_body(client, &teams_url(base_url)).await?;
    let teams = decode_teams(&body)?;
    debug!(count = teams.len(), "decoded teams");
    Ok(teams)
}

/// Fetch every player, in service order.
pub async fn get_players(client: &Client, base_url: &str) -> Result<Vec<Player>> {
    let body = get_body(client, &players_url(base_url)).await?;
    let players = decode_players(&body)?;
    debug!(count = players.len(), "decoded players");
    Ok(players)
}

async fn get_body(client: &Client, url: &str) -> Result<String> {
    debug!(%url, "GET");
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

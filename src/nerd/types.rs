//! XML records served by the teams and players endpoints.

use crate::cli::types::ids::{PlayerId, TeamCode};
use serde::{de::Error, Deserialize, Deserializer, Serialize};


/// Blank `<playerId>` text decodes to the zero ID; anything else must be a number.
fn de_blank_player_id<'de, D>(deserializer: D) -> Result<PlayerId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: String = Deserialize::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(PlayerId::default());
    }
    raw.parse::<u32>().map(PlayerId::new).map_err(D::Error::custom)
}

/// Root of the `/service/teams` payload (`<FantasyBasketballNerd>`).
///
/// The root element name is not checked.
#[derive(Debug, Deserialize)]
pub struct TeamsEnvelope {
    #[serde(rename = "@service", default)]
    pub service: String,
    #[serde(rename = "Team", default)]
    pub teams: Vec<Team>,
}

/// Root of the `/service/players` payload (`<FantasyBasketballNerd>`).
#[derive(Debug, Deserialize)]
pub struct PlayersEnvelope {
    #[serde(rename = "@service", default)]
    pub service: String,
    #[serde(rename = "Player", default)]
    pub players: Vec<Player>,
}

/// Team details
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    #[serde(default)]
    pub code: TeamCode,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub conference: String,
    #[serde(default)]
    pub division: String,
}

/// Player details.
///
/// `team_code` links the player to a [`Team`]; `birth_date`, `height` and
/// `weight` are kept exactly as the service formats them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Player {
    #[serde(
        rename(deserialize = "playerId"),
        deserialize_with = "de_blank_player_id",
        default
    )]
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    #[serde(rename(deserialize = "team"), default)]
    pub team_code: TeamCode,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub weight: String,
    #[serde(rename(deserialize = "dob"), default)]
    pub birth_date: String,
    #[serde(default)]
    pub school: String,
}

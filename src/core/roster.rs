//! Grouping players under their teams.

use serde::Serialize;

use crate::{
    cli::types::ids::TeamCode,
    nerd::types::{Player, Team},
};

/// A team paired with the players whose team code matches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    pub team: Team,
    pub players: Vec<Player>,
}

/// Players whose team code equals `code`, in their original order.
pub fn players_for_team(players: &[Player], code: &TeamCode) -> Vec<Player> {
    players
        .iter()
        .filter(|p| &p.team_code == code)
        .cloned()
        .collect()
}

/// One roster per team, in team order.
///
/// Players whose code matches no team are dropped.
pub fn build_rosters(teams: &[Team], players: &[Player]) -> Vec<Roster> {
    teams
        .iter()
        .map(|team| Roster {
            team: team.clone(),
            players: players_for_team(players, &team.code),
        })
        .collect()
}

//! Season standings.
use serde::{Deserialize, Serialize};

use crate::numbers::round_to_thousandths;
use crate::team::Team;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub rank: usize,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub win_pct: f64,
}

impl StandingsRow {
    fn from_team(rank: usize, team: &Team) -> Self {
        Self {
            rank,
            name: team.name.clone(),
            wins: team.wins(),
            losses: team.losses(),
            win_pct: round_to_thousandths(team.win_pct()),
        }
    }
}

/// Teams ordered by wins, most first.
///
/// The sort is stable: teams with equal wins keep their league order.
#[must_use]
pub fn rank_teams(teams: &[Team]) -> Vec<&Team> {
    let mut ranked: Vec<&Team> = teams.iter().collect();
    ranked.sort_by(|a, b| b.wins().cmp(&a.wins()));
    ranked
}

#[must_use]
pub fn standings_rows(teams: &[Team]) -> Vec<StandingsRow> {
    rank_teams(teams)
        .into_iter()
        .enumerate()
        .map(|(idx, team)| StandingsRow::from_team(idx + 1, team))
        .collect()
}

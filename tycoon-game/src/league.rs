//! League lifecycle: team creation, selection, and season simulation.
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{PLAYER_NAME_PREFIX, ROSTER_SIZE, SEASON_ROUNDS, TEAM_NAMES};
use crate::player::Player;
use crate::rng::{RngBundle, StreamDraws};
use crate::schedule::{Pairing, schedule_round};
use crate::series::{Side, SeriesOutcome, simulate_series};
use crate::standings::{StandingsRow, standings_rows};
use crate::team::Team;

/// Errors raised when league operations are used out of order or with bad input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeagueError {
    #[error("team choice {choice} is out of range (expected 1 to {count})")]
    InvalidTeamChoice { choice: usize, count: usize },
    #[error("{name} is already selected; the selection cannot change")]
    TeamAlreadySelected { name: String },
    #[error("league has no teams")]
    NoTeams,
    #[error("no team has been selected")]
    NoTeamSelected,
}

/// Where the league is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaguePhase {
    Init,
    TeamsCreated,
    TeamPicked,
    SeasonSimulated,
}

/// One series played during a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupResult {
    pub home: String,
    pub away: String,
    pub winner: String,
    pub outcome: SeriesOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub matchups: Vec<MatchupResult>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub seed: u64,
    pub rounds: Vec<RoundSummary>,
    pub standings: Vec<StandingsRow>,
}

impl SeasonSummary {
    #[must_use]
    pub fn matchups_played(&self) -> usize {
        self.rounds.iter().map(|r| r.matchups.len()).sum()
    }
}

/// The league of teams plus the user's pick.
///
/// Teams keep their creation order for the lifetime of the league; rounds
/// shuffle an index order instead of the teams themselves, so the selected
/// index stays valid across seasons.
#[derive(Debug, Clone)]
pub struct League {
    teams: Vec<Team>,
    selected: Option<usize>,
    seasons_played: u32,
    rng: RngBundle,
}

impl League {
    /// Empty league whose randomness is derived from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_teams(seed, Vec::new())
    }

    /// League over a caller-supplied set of teams.
    #[must_use]
    pub fn with_teams(seed: u64, teams: Vec<Team>) -> Self {
        Self {
            teams,
            selected: None,
            seasons_played: 0,
            rng: RngBundle::from_user_seed(seed),
        }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[must_use]
    pub const fn seasons_played(&self) -> u32 {
        self.seasons_played
    }

    #[must_use]
    pub fn phase(&self) -> LeaguePhase {
        if self.teams.is_empty() {
            LeaguePhase::Init
        } else if self.seasons_played > 0 {
            LeaguePhase::SeasonSimulated
        } else if self.selected.is_some() {
            LeaguePhase::TeamPicked
        } else {
            LeaguePhase::TeamsCreated
        }
    }

    /// Populate the fixed league: every name in [`TEAM_NAMES`], each with a
    /// full roster of randomly skilled players.
    ///
    /// Any previous teams and selection are discarded.
    pub fn create_teams(&mut self) {
        let rng = self.rng.rosters();
        let mut teams = Vec::with_capacity(TEAM_NAMES.len());
        for name in TEAM_NAMES {
            let mut team = Team::new(name);
            for idx in 0..ROSTER_SIZE {
                team.add_player(Player::random(format!("{PLAYER_NAME_PREFIX} {idx}"), rng));
            }
            teams.push(team);
        }
        self.teams = teams;
        self.selected = None;
        self.seasons_played = 0;
        debug!("created {} teams", self.teams.len());
    }

    /// Select the user's team by 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::TeamAlreadySelected`] once a team has been
    /// chosen, [`LeagueError::NoTeams`] before teams exist, and
    /// [`LeagueError::InvalidTeamChoice`] when `choice` is outside the list.
    pub fn select_team(&mut self, choice: usize) -> Result<&Team, LeagueError> {
        if let Some(team) = self.selected_team() {
            return Err(LeagueError::TeamAlreadySelected {
                name: team.name.clone(),
            });
        }
        if self.teams.is_empty() {
            return Err(LeagueError::NoTeams);
        }
        let count = self.teams.len();
        let idx = choice
            .checked_sub(1)
            .filter(|idx| *idx < count)
            .ok_or(LeagueError::InvalidTeamChoice { choice, count })?;
        self.selected = Some(idx);
        info!("selected team {}", self.teams[idx].name);
        Ok(&self.teams[idx])
    }

    #[must_use]
    pub fn selected_team(&self) -> Option<&Team> {
        self.selected.and_then(|idx| self.teams.get(idx))
    }

    /// The selected team, or an error when none has been picked yet.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::NoTeamSelected`] before [`Self::select_team`] succeeds.
    pub fn require_selected(&self) -> Result<&Team, LeagueError> {
        self.selected_team().ok_or(LeagueError::NoTeamSelected)
    }

    /// Play one round: shuffle, pair, and record every series.
    pub fn play_round(&mut self, round: u32) -> RoundSummary {
        let pairings = schedule_round(self.teams.len(), self.rng.schedule());
        let mut matchups = Vec::with_capacity(pairings.len());
        for pairing in pairings {
            let outcome = simulate_series(
                &self.teams[pairing.home],
                &self.teams[pairing.away],
                self.rng.games(),
            );
            matchups.push(self.record_result(pairing, outcome));
        }
        debug!("round {round}: {} series played", matchups.len());
        RoundSummary { round, matchups }
    }

    fn record_result(&mut self, pairing: Pairing, outcome: SeriesOutcome) -> MatchupResult {
        let (winner, loser) = match outcome.winner {
            Side::Home => (pairing.home, pairing.away),
            Side::Away => (pairing.away, pairing.home),
        };
        self.teams[winner].add_win();
        self.teams[loser].add_loss();
        MatchupResult {
            home: self.teams[pairing.home].name.clone(),
            away: self.teams[pairing.away].name.clone(),
            winner: self.teams[winner].name.clone(),
            outcome,
        }
    }

    /// Run every round of the season, then develop all rosters once.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::NoTeams`] when the league is empty.
    pub fn simulate_season(&mut self) -> Result<SeasonSummary, LeagueError> {
        if self.teams.is_empty() {
            return Err(LeagueError::NoTeams);
        }
        let rounds: Vec<RoundSummary> = (1..=SEASON_ROUNDS)
            .map(|round| self.play_round(round))
            .collect();
        self.develop_players();
        self.seasons_played = self.seasons_played.saturating_add(1);

        let standings = self.standings();
        if let Some(leader) = standings.first() {
            let draws = self.rng.draw_counts();
            info!(
                "season complete: {} lead with {} wins (rng draws: schedule {}, games {}, development {})",
                leader.name, leader.wins, draws.schedule, draws.games, draws.development
            );
        }
        Ok(SeasonSummary {
            seed: self.seed(),
            rounds,
            standings,
        })
    }

    fn develop_players(&mut self) {
        let rng = self.rng.development();
        for team in &mut self.teams {
            team.develop_players(rng);
        }
    }

    #[must_use]
    pub fn standings(&self) -> Vec<StandingsRow> {
        standings_rows(&self.teams)
    }

    /// Draw calls made so far on each random stream.
    #[must_use]
    pub const fn rng_draws(&self) -> StreamDraws {
        self.rng.draw_counts()
    }
}

//! Best-of-three series simulation.
//!
//! Series are stateless: they borrow both teams for the duration of the
//! games and report who won. Recording the result against team counters is
//! the caller's job (see [`crate::league::League::simulate_season`]).
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{SCORE_CAP_FLOOR, SCORE_SKILL_DIVISOR, SERIES_MAX_GAMES, SERIES_WINS_NEEDED};
use crate::team::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Select the value belonging to this side.
    #[must_use]
    pub const fn pick<'a, T>(self, home: &'a T, away: &'a T) -> &'a T {
        match self {
            Self::Home => home,
            Self::Away => away,
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }
}

/// Runs scored by each side in a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub home: u32,
    pub away: u32,
}

impl GameScore {
    #[must_use]
    pub const fn winner(self) -> Side {
        decide_game(self.home, self.away)
    }
}

pub type GameLog = SmallVec<[GameScore; SERIES_MAX_GAMES]>;

/// Result of one best-of-three series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesOutcome {
    pub winner: Side,
    pub home_wins: u8,
    pub away_wins: u8,
    pub games: GameLog,
}

impl SeriesOutcome {
    #[must_use]
    pub const fn loser(&self) -> Side {
        self.winner.opponent()
    }
}

/// Highest score a team can post in one game.
#[must_use]
pub fn score_cap(team: &Team) -> u32 {
    (team.total_batting() / SCORE_SKILL_DIVISOR).max(SCORE_CAP_FLOOR)
}

/// Draw one game's score uniformly from `0..=score_cap(team)`.
///
/// Only batting contributes; pitching has no effect on scoring.
pub fn simulate_score<R>(team: &Team, rng: &mut R) -> u32
where
    R: Rng + ?Sized,
{
    rng.gen_range(0..=score_cap(team))
}

/// Home wins only on a strictly greater score; ties go to the away side.
#[must_use]
pub const fn decide_game(home_score: u32, away_score: u32) -> Side {
    if home_score > away_score {
        Side::Home
    } else {
        Side::Away
    }
}

/// Play games until one side reaches two wins.
pub fn simulate_series<R>(home: &Team, away: &Team, rng: &mut R) -> SeriesOutcome
where
    R: Rng + ?Sized,
{
    let mut home_wins = 0u8;
    let mut away_wins = 0u8;
    let mut games = GameLog::new();
    while home_wins < SERIES_WINS_NEEDED && away_wins < SERIES_WINS_NEEDED {
        let home_score = simulate_score(home, rng);
        let away_score = simulate_score(away, rng);
        let score = GameScore {
            home: home_score,
            away: away_score,
        };
        match score.winner() {
            Side::Home => home_wins += 1,
            Side::Away => away_wins += 1,
        }
        games.push(score);
    }
    let winner = if home_wins == SERIES_WINS_NEEDED {
        Side::Home
    } else {
        Side::Away
    };
    SeriesOutcome {
        winner,
        home_wins,
        away_wins,
        games,
    }
}

/// Play a series and hand back whichever of the two teams won it.
pub fn play_best_of_three<'a, R>(home: &'a Team, away: &'a Team, rng: &mut R) -> &'a Team
where
    R: Rng + ?Sized,
{
    simulate_series(home, away, rng).winner.pick(home, away)
}

//! Baseball Manager Tycoon Engine
//!
//! Platform-agnostic league logic: players, teams, best-of-three series and
//! seasons. This crate performs no I/O; every random draw comes from an
//! explicit, seedable generator so runs can be replayed.

pub mod constants;
pub mod league;
pub mod numbers;
pub mod player;
pub mod rng;
pub mod schedule;
pub mod series;
pub mod standings;
pub mod team;

// Re-export commonly used types
pub use league::{League, LeagueError, LeaguePhase, MatchupResult, RoundSummary, SeasonSummary};
pub use player::Player;
pub use rng::{CountingRng, RngBundle, StreamDraws};
pub use schedule::{Pairing, pair_round, schedule_round, shuffled_order};
pub use series::{
    GameScore, Side, SeriesOutcome, decide_game, play_best_of_three, score_cap, simulate_score,
    simulate_series,
};
pub use standings::{StandingsRow, rank_teams, standings_rows};
pub use team::{Roster, Team};

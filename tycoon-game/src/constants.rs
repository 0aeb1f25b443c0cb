//! Centralized league rules for Baseball Manager Tycoon.
//!
//! These values define the fixed math of the simulation. Keeping them
//! together ensures the rules can only change through reviewed code, never
//! through runtime configuration.

// League shape ---------------------------------------------------------------
pub const TEAM_NAMES: [&str; 30] = [
    "Red Sox",
    "Yankees",
    "Dodgers",
    "Giants",
    "Cubs",
    "White Sox",
    "Astros",
    "Mets",
    "Braves",
    "Phillies",
    "Cardinals",
    "Pirates",
    "Reds",
    "Brewers",
    "Rockies",
    "Padres",
    "Diamondbacks",
    "Marlins",
    "Blue Jays",
    "Rangers",
    "Orioles",
    "Tigers",
    "Royals",
    "Twins",
    "Athletics",
    "Mariners",
    "Rays",
    "Indians",
    "Nationals",
    "Angels",
];
pub const ROSTER_SIZE: usize = 5;
pub const PLAYER_NAME_PREFIX: &str = "Player";

// Player skills --------------------------------------------------------------
/// Exclusive upper bound for a freshly generated skill.
pub const SKILL_INITIAL_BOUND: u32 = 100;
/// Exclusive upper bound for a single development step.
pub const SKILL_IMPROVEMENT_BOUND: u32 = 5;

// Series scoring -------------------------------------------------------------
pub const SERIES_WINS_NEEDED: u8 = 2;
pub const SERIES_MAX_GAMES: usize = 3;
pub const SCORE_SKILL_DIVISOR: u32 = 10;
pub const SCORE_CAP_FLOOR: u32 = 1;

// Season ---------------------------------------------------------------------
pub const SEASON_ROUNDS: u32 = 60;

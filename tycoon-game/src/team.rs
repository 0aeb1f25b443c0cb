//! Teams, rosters, and season records.
use rand::Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::ROSTER_SIZE;
use crate::numbers::ratio;
use crate::player::Player;

/// Rosters stay inline for the standard team size and spill past it.
pub type Roster = SmallVec<[Player; ROSTER_SIZE]>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    roster: Roster,
    wins: u32,
    losses: u32,
}

impl Team {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster: Roster::new(),
            wins: 0,
            losses: 0,
        }
    }

    #[must_use]
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// Append a player. No duplicate or capacity checks.
    pub fn add_player(&mut self, player: Player) {
        self.roster.push(player);
    }

    /// Remove the first roster entry equal to `player`.
    pub fn remove_player(&mut self, player: &Player) -> Option<Player> {
        let idx = self.roster.iter().position(|p| p == player)?;
        Some(self.roster.remove(idx))
    }

    pub const fn add_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    pub const fn add_loss(&mut self) {
        self.losses = self.losses.saturating_add(1);
    }

    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub const fn losses(&self) -> u32 {
        self.losses
    }

    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.wins.saturating_add(self.losses)
    }

    /// Fraction of series won, `0.0` before any are played.
    #[must_use]
    pub fn win_pct(&self) -> f64 {
        ratio(self.wins, self.games_played())
    }

    /// Aggregate batting skill across the roster.
    #[must_use]
    pub fn total_batting(&self) -> u32 {
        self.roster
            .iter()
            .fold(0u32, |acc, p| acc.saturating_add(p.batting))
    }

    /// Improve every player's skills, in roster order.
    pub fn develop_players<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for player in &mut self.roster {
            player.improve_skills(rng);
        }
    }
}

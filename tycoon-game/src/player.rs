//! Players and their skill development.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{SKILL_IMPROVEMENT_BOUND, SKILL_INITIAL_BOUND};

/// A single rostered player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub batting: u32,
    pub pitching: u32,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>, batting: u32, pitching: u32) -> Self {
        Self {
            name: name.into(),
            batting,
            pitching,
        }
    }

    /// Create a player whose skills are drawn uniformly below the initial bound.
    pub fn random<R>(name: impl Into<String>, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let batting = rng.gen_range(0..SKILL_INITIAL_BOUND);
        let pitching = rng.gen_range(0..SKILL_INITIAL_BOUND);
        Self::new(name, batting, pitching)
    }

    /// Raise both skills by independent draws below the improvement bound.
    ///
    /// Skills are uncapped; a draw of zero leaves a skill unchanged.
    pub fn improve_skills<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.batting = self
            .batting
            .saturating_add(rng.gen_range(0..SKILL_IMPROVEMENT_BOUND));
        self.pitching = self
            .pitching
            .saturating_add(rng.gen_range(0..SKILL_IMPROVEMENT_BOUND));
    }
}

//! Round pairing for the season loop.
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Two league indices meeting in one round; the first hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub home: usize,
    pub away: usize,
}

/// Uniformly shuffled permutation of `0..len`.
pub fn shuffled_order<R>(len: usize, rng: &mut R) -> Vec<usize>
where
    R: Rng + ?Sized,
{
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

/// Pair consecutive entries; a trailing odd entry sits the round out.
#[must_use]
pub fn pair_round(order: &[usize]) -> Vec<Pairing> {
    order
        .chunks_exact(2)
        .map(|pair| Pairing {
            home: pair[0],
            away: pair[1],
        })
        .collect()
}

/// Shuffle and pair in one step.
pub fn schedule_round<R>(len: usize, rng: &mut R) -> Vec<Pairing>
where
    R: Rng + ?Sized,
{
    pair_round(&shuffled_order(len, rng))
}

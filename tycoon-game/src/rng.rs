//! Deterministic random streams for league simulation.
//!
//! A single user-visible seed fans out into one stream per simulation
//! domain, so drawing an extra score never shifts the next season's
//! schedule or the next roster.
use hmac::{Hmac, Mac};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use sha2::Sha256;

/// Bundle of RNG streams segregated by simulation domain.
#[derive(Debug, Clone)]
pub struct RngBundle {
    seed: u64,
    rosters: CountingRng<ChaCha20Rng>,
    schedule: CountingRng<ChaCha20Rng>,
    games: CountingRng<ChaCha20Rng>,
    development: CountingRng<ChaCha20Rng>,
}

impl RngBundle {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        Self {
            seed,
            rosters: CountingRng::new(derive_stream_seed(seed, b"rosters")),
            schedule: CountingRng::new(derive_stream_seed(seed, b"schedule")),
            games: CountingRng::new(derive_stream_seed(seed, b"games")),
            development: CountingRng::new(derive_stream_seed(seed, b"development")),
        }
    }

    /// Seed the bundle was derived from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Stream used when generating player skills for new rosters.
    pub fn rosters(&mut self) -> &mut CountingRng<ChaCha20Rng> {
        &mut self.rosters
    }

    /// Stream used to shuffle the round order.
    pub fn schedule(&mut self) -> &mut CountingRng<ChaCha20Rng> {
        &mut self.schedule
    }

    /// Stream used for per-game scores.
    pub fn games(&mut self) -> &mut CountingRng<ChaCha20Rng> {
        &mut self.games
    }

    /// Stream used for end-of-season player development.
    pub fn development(&mut self) -> &mut CountingRng<ChaCha20Rng> {
        &mut self.development
    }

    /// Draw calls made so far on each stream.
    #[must_use]
    pub const fn draw_counts(&self) -> StreamDraws {
        StreamDraws {
            rosters: self.rosters.draws(),
            schedule: self.schedule.draws(),
            games: self.games.draws(),
            development: self.development.draws(),
        }
    }
}

/// Per-stream draw totals, for logging how much randomness a run consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreamDraws {
    pub rosters: u64,
    pub schedule: u64,
    pub games: u64,
    pub development: u64,
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<ChaCha20Rng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl<R: RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()).expect("64-bit seed is valid key");
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}

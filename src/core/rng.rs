//! Deterministic random number generation.
//!
//! The game draws randomness in four places: per-participant target and limb
//! assignment, actor selection, and the biased coin deciding whether the
//! actor's action is trivially their own assignment. All of it goes through
//! `GameRng` so a seeded game replays identically, which is what makes the
//! timer-driven controller testable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::action::{ActionPair, Limb, Target};

/// Deterministic RNG for game draws.
///
/// Uses ChaCha8: fast, and the same seed always produces the same game.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw a target uniformly at random.
    pub fn random_target(&mut self) -> Target {
        if self.inner.gen_bool(0.5) {
            Target::A
        } else {
            Target::B
        }
    }

    /// Draw a limb uniformly at random.
    pub fn random_limb(&mut self) -> Limb {
        if self.inner.gen_bool(0.5) {
            Limb::Hand
        } else {
            Limb::Leg
        }
    }

    /// Draw a target/limb pair uniformly from all four combinations.
    pub fn random_pair(&mut self) -> ActionPair {
        ActionPair::ALL[self.inner.gen_range(0..ActionPair::ALL.len())]
    }

    /// Draw a uniform index in `0..len`. `len` must be non-zero.
    pub fn random_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Flip a biased coin with the given probability of `true`.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}

//! Seedable RNG shared by every spawn roll.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Resource, Debug, Clone)]
pub struct GameRng(Pcg32);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(Pcg32::from_os_rng())
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Uniform integer in `lo..=hi`.
    #[inline]
    pub fn between(&mut self, lo: i32, hi: i32) -> i32 {
        self.0.random_range(lo..=hi)
    }

    /// Roll `0..=sides` and report whether it landed below `below`.
    #[inline]
    pub fn chance(&mut self, sides: i32, below: i32) -> bool {
        self.between(0, sides) < below
    }
}

use core::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use naming_core::GeneratesRandomNumbers;

/// Output range of [`OneThroughTen`]. Both bounds are inclusive.
pub const RANGE: RangeInclusive<i64> = 1..=10;

/// Generator of integers uniformly distributed over the closed range `[1, 10]`.
#[derive(Debug, Clone)]
pub struct OneThroughTen<R = StdRng> {
    rng: R,
}

impl OneThroughTen {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for OneThroughTen {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> OneThroughTen<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> GeneratesRandomNumbers for OneThroughTen<R> {
    fn random(&mut self) -> i64 {
        let value = self.rng.gen_range(RANGE);
        tracing::trace!(value, "rolled");
        value
    }
}

//! Seeded gap generator
//!
//! Gap offsets come from a PCG stream seeded once per game, so a run can be
//! replayed exactly from its seed and input timeline.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

#[derive(Debug, Clone)]
pub struct GapGenerator {
    draws: u64,
    rng: Pcg32,
}

impl GapGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            draws: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Number of offsets drawn so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Uniform offset in `[min, max]` on an integer grid anchored at `min`.
    ///
    /// `min == max` (or an inverted range) always yields `min`.
    pub fn next_gap_offset(&mut self, min: f32, max: f32) -> f32 {
        self.draws += 1;
        let steps = (max - min).floor();
        if steps.is_nan() || steps < 1.0 {
            return min;
        }
        let k = self.rng.random_range(0..=steps as u32);
        min + k as f32
    }
}

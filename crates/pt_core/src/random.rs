//! Injectable randomness for scoring and field generation.
//!
//! Every random draw in the engine goes through [`UniformSource`]. Any `rand`
//! generator works as-is (`rand::thread_rng()` in normal play, a seeded
//! [`ChaCha8Rng`] for reproducible runs), and [`ScriptedSource`] replays a fixed
//! list of samples so tests can force exact scores.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Largest sample a source may hand out; uniform samples live in [0, 1).
const MAX_UNIFORM: f64 = 1.0 - f64::EPSILON;

/// A stream of uniform samples in [0, 1).
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;

    /// Uniform sample in [low, high).
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_uniform() * (high - low)
    }
}

impl<R: RngCore> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Seeded generator for reproducible sessions.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Replays a fixed sample list, wrapping around when exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Samples outside [0, 1) are clamped into range.
    pub fn new(samples: Vec<f64>) -> Self {
        let samples = samples.into_iter().map(|s| s.clamp(0.0, MAX_UNIFORM)).collect();
        Self { samples, cursor: 0 }
    }

    /// A source that always yields the same sample.
    pub fn constant(sample: f64) -> Self {
        Self::new(vec![sample])
    }

    /// Number of samples drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.5;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}

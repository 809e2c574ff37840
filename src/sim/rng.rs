//! Uniform random source used by the spawn director
//!
//! The simulation only ever needs samples in `[0, 1)`. Production runs use a
//! PCG32 generator; tests and scripted demos replay a fixed sequence.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in `[0, bound)`
    fn next_below(&mut self, bound: f32) -> f32 {
        self.next_unit() * bound.max(0.0)
    }

    /// Uniform count in `1..=max`
    fn next_count(&mut self, max: u32) -> u32 {
        let max = max.max(1);
        (1 + (self.next_unit() * max as f32) as u32).min(max)
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seed a PCG32 generator for one run
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of unit samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    samples: Vec<f32>,
    cursor: usize,
}

impl SequenceRandom {
    /// Samples are clamped into `[0, 1)`; an empty list always yields 0
    pub fn new(samples: impl IntoIterator<Item = f32>) -> Self {
        let samples = samples
            .into_iter()
            .map(|s| s.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        Self { samples, cursor: 0 }
    }

    /// How many samples have been drawn
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}

#![forbid(unsafe_code)]

//! Uniform random sources for scrambling.
//!
//! The scramble generator only needs a stream of values in `[0, 1)`.
//! Every [`rand::Rng`] is a [`RandomSource`]; [`SequenceRandom`] replays a
//! fixed script for deterministic tests and replays.

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A stream of uniform values in `[0, 1)`.
pub trait RandomSource {
    /// Next value, uniformly distributed in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..bound`.
    ///
    /// `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index bound must be non-zero");
        ((self.next_unit() * bound as f64) as usize).min(bound.saturating_sub(1))
    }
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Seeded generator used by the harness and by property tests.
#[must_use]
pub fn seeded(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// # Panics
    ///
    /// Panics if `values` is empty or holds a value outside `[0, 1)`.
    #[must_use]
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "sequence must not be empty");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "sequence values must lie in [0, 1)"
        );
        Self { values, cursor: 0 }
    }

    /// How many values have been drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

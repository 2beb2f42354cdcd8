//! Injectable uniform random source.
//!
//! Fragment and primer sizing is the only non-deterministic part of the
//! replication model. Everything that draws random numbers takes a
//! `UniformSource`, so callers pick between a seeded generator and a scripted
//! stub.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// A source of integers drawn uniformly from an inclusive range.
pub trait UniformSource {
    /// Draw an integer uniformly from `[min, max]`.
    ///
    /// Implementations return `min` when `min >= max`.
    fn uniform_in(&mut self, min: i64, max: i64) -> i64;
}

impl<U: UniformSource + ?Sized> UniformSource for &mut U {
    fn uniform_in(&mut self, min: i64, max: i64) -> i64 {
        (**self).uniform_in(min, max)
    }
}

/// Uniform source backed by Xoshiro256++.
#[derive(Debug, Clone)]
pub struct SeededUniform {
    rng: Xoshiro256PlusPlus,
}

impl SeededUniform {
    /// Create a reproducible source from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        }
    }

    /// Use `seed` when given, otherwise fall back to entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for SeededUniform {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl UniformSource for SeededUniform {
    fn uniform_in(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }
}

/// Deterministic source that replays a scripted list of values.
///
/// Values cycle once exhausted and are clamped into the requested range, so a
/// single script can drive draws with different bounds. An empty script
/// always yields the lower bound.
#[derive(Debug, Clone, Default)]
pub struct FixedUniform {
    values: Vec<i64>,
    cursor: usize,
}

impl FixedUniform {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// A source that always yields `value` (clamped).
    pub fn constant(value: i64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl UniformSource for FixedUniform {
    fn uniform_in(&mut self, min: i64, max: i64) -> i64 {
        if self.values.is_empty() || min >= max {
            self.cursor += 1;
            return min;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(min, max)
    }
}

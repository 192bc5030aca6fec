//! Random sources for word selection.
//!
//! The query engine never reaches for a process-global RNG. Every draw goes
//! through a caller-supplied [`RandomSource`], which makes selection
//! reproducible in tests and lets the embedding application choose its
//! entropy.
//!
//! # Sources
//!
//! - **SystemRandom**: OS cryptographically secure generator (the default)
//! - **SeededRandom**: ChaCha8 seeded from a `u64`, bit-identical across runs
//! - **ScriptedRandom**: replays a fixed list of draws

use rand::rngs::OsRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Return a value in the half-open interval `[low, high)`.
    ///
    /// Callers guarantee `low < high`.
    fn draw(&mut self, low: u64, high: u64) -> u64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn draw(&mut self, low: u64, high: u64) -> u64 {
        (**self).draw(low, high)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn draw(&mut self, low: u64, high: u64) -> u64 {
        (**self).draw(low, high)
    }
}

/// Operating-system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn draw(&mut self, low: u64, high: u64) -> u64 {
        OsRng.gen_range(low..high)
    }
}

/// Deterministic source seeded from a `u64`.
///
/// Given the same seed and the same sequence of intervals, draws are
/// identical across runs and platforms.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn draw(&mut self, low: u64, high: u64) -> u64 {
        self.rng.gen_range(low..high)
    }
}

/// Replays a fixed sequence of draws, ignoring the requested interval.
///
/// Once the script is exhausted it keeps returning the last value (or
/// `low` if the script was empty). Values are returned as-is, so a script
/// can also exercise the engine's handling of a misbehaving source.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<u64>,
    last: Option<u64>,
}

impl ScriptedRandom {
    pub fn new<I: IntoIterator<Item = u64>>(draws: I) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            last: None,
        }
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn draw(&mut self, low: u64, _high: u64) -> u64 {
        if let Some(next) = self.draws.pop_front() {
            self.last = Some(next);
        }
        self.last.unwrap_or(low)
    }
}

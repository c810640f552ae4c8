// ReelForge Choice Source
// Copyright (c) 2026 Xing_The_Creator | ReelForge
//
// Template selection goes through this trait so tests and the CLI can pin
// the outcome of otherwise random picks.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index into a candidate pool.
pub trait ChoiceSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn choose(&self, len: usize) -> usize;
}

/// Uniform selection backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngChoice;

impl ChoiceSource for ThreadRngChoice {
    fn choose(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform selection from a seeded generator, reproducible across runs.
pub struct SeededChoice {
    rng: Mutex<StdRng>,
}

impl SeededChoice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ChoiceSource for SeededChoice {
    fn choose(&self, len: usize) -> usize {
        self.rng.lock().gen_range(0..len)
    }
}

/// Always picks the same slot (wrapped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedChoice(pub usize);

impl ChoiceSource for FixedChoice {
    fn choose(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Picks one element of `pool` using `source`. Out-of-range indices wrap.
pub fn pick<'a, T>(source: &dyn ChoiceSource, pool: &'a [T]) -> &'a T {
    &pool[source.choose(pool.len()) % pool.len()]
}

//! The single stream of random draws every other component consumes.
//!
//! All randomness in the engine goes through [`RandomSource`], so a game is
//! fully reproducible from a seed plus the sequence of player choices.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random draws used by the simulation.
pub trait RandomSource {
    /// Integer in `[low, high]`, both ends inclusive.
    fn int_range(&mut self, low: i64, high: i64) -> i64;

    /// Real number in `[low, high)`. A degenerate range yields `low`.
    fn float_range(&mut self, low: f64, high: f64) -> f64;

    /// Uniformly chosen index into a collection of `len` items.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Fair coin flip.
    fn coin_flip(&mut self) -> bool {
        self.choose_index(2) == 0
    }
}

/// Production random source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: StdRng,
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os() -> Self {
        Self {
            inner: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for GameRng {
    fn int_range(&mut self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        self.inner.random_range(low..=high)
    }

    fn float_range(&mut self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        self.inner.random_range(low..high)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.inner.random_range(0..len)
    }
}

/// Replays queued draws, for tests that need to force a particular outcome.
///
/// Each kind of draw has its own queue. Queued values are clamped into the
/// requested range; an empty queue yields the low end of the range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    ints: VecDeque<i64>,
    floats: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ints(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.ints.extend(values);
        self
    }

    pub fn with_floats(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.floats.extend(values);
        self
    }

    pub fn with_indices(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(values);
        self
    }

    pub fn push_int(&mut self, value: i64) {
        self.ints.push_back(value);
    }

    pub fn push_float(&mut self, value: f64) {
        self.floats.push_back(value);
    }

    pub fn push_index(&mut self, value: usize) {
        self.indices.push_back(value);
    }

    /// Number of queued draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.ints.len() + self.floats.len() + self.indices.len()
    }
}

impl RandomSource for ScriptedRng {
    fn int_range(&mut self, low: i64, high: i64) -> i64 {
        match self.ints.pop_front() {
            Some(v) => v.clamp(low, high.max(low)),
            None => low,
        }
    }

    fn float_range(&mut self, low: f64, high: f64) -> f64 {
        match self.floats.pop_front() {
            Some(v) => v.clamp(low, high.max(low)),
            None => low,
        }
    }

    fn choose_index(&mut self, len: usize) -> usize {
        match self.indices.pop_front() {
            Some(v) => v.min(len.saturating_sub(1)),
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = GameRng::seeded(7);
        let mut b = GameRng::seeded(7);
        for _ in 0..20 {
            assert_eq!(a.int_range(1, 100), b.int_range(1, 100));
            assert_eq!(a.float_range(0.0, 10.0), b.float_range(0.0, 10.0));
        }
    }

    #[test]
    fn seeded_rng_stays_in_bounds() {
        let mut rng = GameRng::seeded(99);
        for _ in 0..500 {
            let i = rng.int_range(1, 100);
            assert!((1..=100).contains(&i));
            let f = rng.float_range(-0.05, 0.05);
            assert!((-0.05..0.05).contains(&f));
            assert!(rng.choose_index(7) < 7);
        }
        assert_eq!(rng.float_range(3.0, 3.0), 3.0);
        assert_eq!(rng.choose_index(0), 0);
    }

    #[test]
    fn scripted_rng_replays_and_clamps() {
        let mut rng = ScriptedRng::new()
            .with_ints([95, 500])
            .with_floats([0.25])
            .with_indices([9]);

        assert_eq!(rng.int_range(1, 100), 95);
        assert_eq!(rng.int_range(1, 100), 100);
        assert_eq!(rng.float_range(0.0, 1.0), 0.25);
        assert_eq!(rng.choose_index(3), 2);
        assert_eq!(rng.remaining(), 0);

        // Exhausted queues fall back to the low bound.
        assert_eq!(rng.int_range(4, 9), 4);
        assert_eq!(rng.float_range(-1.0, 1.0), -1.0);
    }
}

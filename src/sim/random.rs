//! Random integer source for every stochastic placement/speed decision
//!
//! Samples are drawn by flooring a scaled unit sample. Rounding a continuous
//! sample would under-weight both endpoints of the range.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::error::SimError;

/// Validated inclusive integer range (`min <= max`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    min: i32,
    max: i32,
}

impl IntRange {
    /// Build a range, rejecting `min > max`
    pub fn new(min: i32, max: i32) -> Result<Self, SimError> {
        if min > max {
            return Err(SimError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Range from bounds already known to be ordered (constants, validated
    /// config). In a `const` a bad pair fails the build.
    pub const fn fixed(min: i32, max: i32) -> Self {
        assert!(min <= max, "IntRange::fixed requires min <= max");
        Self { min, max }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of integers in the range (up to 2^32 for the full `i32` span)
    pub fn len(&self) -> u64 {
        (self.max as i64 - self.min as i64 + 1) as u64
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Supplies uniformly distributed integers
pub trait RandomProvider {
    /// Next uniform sample in `[0, 1)`. Consumes one unit of entropy.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in a validated range
    fn sample(&mut self, range: IntRange) -> i32 {
        let len = range.len() as i64;
        // Guard the upper edge against a provider returning exactly 1.0
        let offset = ((self.next_unit() * len as f64).floor() as i64).clamp(0, len - 1);
        (range.min as i64 + offset) as i32
    }

    /// Uniform integer in `[min, max]`, both inclusive
    fn random_int(&mut self, min: i32, max: i32) -> Result<i32, SimError> {
        Ok(self.sample(IntRange::new(min, max)?))
    }
}

/// Default provider: PCG32 seeded from a `u64` for reproducible runs
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this provider was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomProvider for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Replays fixed unit samples, cycling when exhausted
    pub(crate) struct ScriptedRandom {
        samples: Vec<f64>,
        next: usize,
    }

    impl ScriptedRandom {
        pub(crate) fn new(samples: Vec<f64>) -> Self {
            Self { samples, next: 0 }
        }

        /// Samples that make `sample(range)` return exactly `values`
        pub(crate) fn picking(picks: &[(i32, IntRange)]) -> Self {
            let samples = picks
                .iter()
                .map(|&(value, range)| {
                    let index = (value as i64 - range.min() as i64) as f64;
                    (index + 0.5) / range.len() as f64
                })
                .collect();
            Self::new(samples)
        }
    }

    impl RandomProvider for ScriptedRandom {
        fn next_unit(&mut self) -> f64 {
            let sample = self.samples[self.next % self.samples.len()];
            self.next += 1;
            sample
        }
    }

    #[test]
    fn test_invalid_range_rejected() {
        let mut rng = SeededRandom::new(1);
        assert_eq!(
            rng.random_int(4, 1),
            Err(SimError::InvalidRange { min: 4, max: 1 })
        );
    }

    #[test]
    fn test_single_value_range() {
        let mut rng = SeededRandom::new(7);
        for _ in 0..20 {
            assert_eq!(rng.random_int(3, 3), Ok(3));
        }
    }

    #[test]
    fn test_floor_mapping_hits_endpoints() {
        let range = IntRange::fixed(1, 4);
        let mut rng = ScriptedRandom::new(vec![0.0, 0.2499, 0.25, 0.9999, 1.0]);
        let drawn: Vec<i32> = (0..5).map(|_| rng.sample(range)).collect();
        assert_eq!(drawn, vec![1, 1, 2, 4, 4]);
    }

    #[test]
    fn test_distribution_is_uniform_including_endpoints() {
        let mut rng = SeededRandom::new(12345);
        let mut counts = [0u32; 4];
        let draws = 40_000;
        for _ in 0..draws {
            let v = rng.random_int(1, 4).unwrap();
            counts[(v - 1) as usize] += 1;
        }
        // Each bucket should be near 10_000; rounding would starve 1 and 4
        for count in counts {
            assert!((9_000..11_000).contains(&count), "counts: {counts:?}");
        }
    }

    #[test]
    fn test_negative_ranges() {
        let mut rng = SeededRandom::new(3);
        for _ in 0..100 {
            let v = rng.random_int(-4, -1).unwrap();
            assert!((-4..=-1).contains(&v));
        }
    }

    #[test]
    fn test_full_i32_range() {
        let range = IntRange::fixed(i32::MIN, i32::MAX);
        assert_eq!(range.len(), 1 << 32);

        let mut edges = ScriptedRandom::new(vec![0.0, 0.5, 1.0]);
        assert_eq!(edges.sample(range), i32::MIN);
        assert_eq!(edges.sample(range), 0);
        assert_eq!(edges.sample(range), i32::MAX);

        let mut rng = SeededRandom::new(5);
        let drawn: Vec<i32> = (0..200)
            .map(|_| rng.random_int(i32::MIN, i32::MAX).unwrap())
            .collect();
        assert!(drawn.iter().any(|&v| v < 0));
        assert!(drawn.iter().any(|&v| v > 0));
        assert!(drawn.iter().all(|&v| v != i32::MIN));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRandom::new(99);
        let mut b = SeededRandom::new(99);
        for _ in 0..50 {
            assert_eq!(a.random_int(0, 100), b.random_int(0, 100));
        }
        assert_eq!(a.seed(), 99);
    }
}

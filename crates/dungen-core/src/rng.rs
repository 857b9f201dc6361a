//! Random number generation for layout runs
//!
//! Uses a seeded ChaCha RNG so a seed and a config reproduce a layout.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Layout random number generator
///
/// Wraps ChaCha8Rng and remembers its seed so a finished layout can report
/// it.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DungeonRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a value in `lo..=hi`. An inverted range yields `lo`.
    pub fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Returns true with the given probability, clamped to `[0, 1]`
    pub fn chance(&mut self, probability: f64) -> bool {
        if probability.is_nan() || probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        self.rng.gen_bool(probability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = DungeonRng::new(7);
        let mut seen_lo = false;
        let mut seen_hi = false;
        for _ in 0..1000 {
            let n = rng.range_inclusive(4, 5);
            assert!((4..=5).contains(&n));
            seen_lo |= n == 4;
            seen_hi |= n == 5;
        }
        assert!(seen_lo && seen_hi, "both ends of the range should appear");
        assert_eq!(rng.range_inclusive(3, 3), 3);
        assert_eq!(rng.range_inclusive(9, 2), 9);
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = DungeonRng::new(1);
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
            assert!(!rng.chance(f64::NAN));
        }
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(DungeonRng::new(1234).seed(), 1234);
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = DungeonRng::new(42);
        let mut rng2 = DungeonRng::new(42);
        for _ in 0..100 {
            assert_eq!(rng1.range_inclusive(0, 99), rng2.range_inclusive(0, 99));
            assert_eq!(rng1.chance(0.5), rng2.chance(0.5));
        }
    }
}

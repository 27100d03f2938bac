//! Deterministic random starting-list generation
//!
//! Uses PCG (Permuted Congruential Generator) so that a given seed always
//! produces the same starting list, across runs and platforms. The binary
//! seeds from OS entropy unless the user passes an explicit seed; tests pin
//! seeds for reproducibility.

use rand::prelude::*;
use rand_pcg::Pcg64;

/// Seeded generator for random starting lists
#[derive(Debug, Clone)]
pub struct ListGenerator {
    /// Seed this generator was built from
    seed: u64,

    /// Internal PCG state
    rng: Pcg64,
}

impl ListGenerator {
    /// Create a generator from an explicit seed
    pub fn new(seed: u64) -> Self {
        ListGenerator {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was built from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Produce `count` uniformly random values in `[min_val, max_val]`
    /// inclusive. Callers must ensure `min_val <= max_val`.
    pub fn starting_list(&mut self, count: usize, min_val: i32, max_val: i32) -> Vec<i32> {
        (0..count)
            .map(|_| self.rng.gen_range(min_val..=max_val))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_list() {
        let a = ListGenerator::new(42).starting_list(40, 0, 100);
        let b = ListGenerator::new(42).starting_list(40, 0, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn values_stay_within_bounds() {
        let list = ListGenerator::new(7).starting_list(200, -5, 5);
        assert_eq!(list.len(), 200);
        assert!(list.iter().all(|&v| (-5..=5).contains(&v)));
    }

    #[test]
    fn different_seeds_diverge() {
        let a = ListGenerator::new(1).starting_list(40, 0, 100);
        let b = ListGenerator::new(2).starting_list(40, 0, 100);
        assert_ne!(a, b);
    }
}

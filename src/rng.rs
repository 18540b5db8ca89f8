//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps the `rand` crate for the two
//! draws this crate needs: a uniform index into the population, and random
//! bit-string chromosomes for clients and tests.
//!
//! ## Example
//!
//! ```rust
//! use volunteer_pool::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let chromosome = rng.chromosome(16);
//! assert_eq!(chromosome.len(), 16);
//!
//! let index = rng.index(10).unwrap();
//! assert!(index < 10);
//! assert!(rng.index(0).is_none());
//! ```
//!
//! ## Thread-local RNG
//!
//! For parallel clients the crate also provides a `ThreadLocalRng` that can
//! be used without synchronization:
//!
//! ```rust
//! use volunteer_pool::rng::ThreadLocalRng;
//!
//! let chromosome = ThreadLocalRng::chromosome(8);
//! assert!(chromosome.chars().all(|c| c == '0' || c == '1'));
//! ```

use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

fn draw_chromosome<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| if rng.gen_bool(0.5) { '1' } else { '0' })
        .collect()
}

/// A thread-local random number generator that can be used without synchronization.
pub struct ThreadLocalRng;

impl ThreadLocalRng {
    /// Generates a random bit-string of `len` characters.
    pub fn chromosome(len: usize) -> String {
        draw_chromosome(&mut thread_rng(), len)
    }
}

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Clone)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws an index uniformly from `0..len`, or `None` when `len` is zero.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }

    /// Generates a random bit-string of `len` characters.
    pub fn chromosome(&mut self, len: usize) -> String {
        draw_chromosome(&mut self.rng, len)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RandomNumberGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RandomNumberGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_within_range() {
        let mut rng = RandomNumberGenerator::new();
        for len in 1..50 {
            let index = rng.index(len).unwrap();
            assert!(index < len);
        }
    }

    #[test]
    fn test_index_of_empty_range() {
        let mut rng = RandomNumberGenerator::new();
        assert_eq!(rng.index(0), None);
    }

    #[test]
    fn test_index_covers_every_slot() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut seen = [false; 4];
        for _ in 0..400 {
            seen[rng.index(4).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_chromosome_is_binary() {
        let mut rng = RandomNumberGenerator::new();
        let chromosome = rng.chromosome(64);
        assert_eq!(chromosome.len(), 64);
        assert!(chromosome.chars().all(|c| c == '0' || c == '1'));
        assert!(rng.chromosome(0).is_empty());
    }

    #[test]
    fn test_clone() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        // Both RNGs should generate the same sequence after cloning
        assert_eq!(rng1.chromosome(32), rng2.chromosome(32));
        assert_eq!(rng1.index(1000), rng2.index(1000));
    }

    #[test]
    fn test_thread_local_rng() {
        let chromosome = ThreadLocalRng::chromosome(16);
        assert_eq!(chromosome.len(), 16);
        assert!(chromosome.chars().all(|c| c == '0' || c == '1'));
    }
}

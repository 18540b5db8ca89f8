//! # Challenge
//!
//! Client-side fitness functions. Volunteers score their chromosomes locally
//! and submit the result; the pool never calls these. They live here so
//! clients, tests and benchmarks agree on how a submission's fitness is
//! produced.
//!
//! ```rust
//! use volunteer_pool::challenge::{Challenge, MaxOnes, Trap};
//!
//! assert_eq!(MaxOnes.score("101101"), 4);
//!
//! let trap = Trap::new(2);
//! assert_eq!(trap.chromosome_len(), 8);
//! assert_eq!(trap.score("11111111"), 8);
//! assert_eq!(trap.score("00000000"), 6);
//! ```

/// A fitness function over bit-string chromosomes.
pub trait Challenge {
    /// Scores `chromosome`. Characters other than `'1'` count as zero bits.
    fn score(&self, chromosome: &str) -> u64;
}

/// Counts the set bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOnes;

impl Challenge for MaxOnes {
    fn score(&self, chromosome: &str) -> u64 {
        chromosome.bytes().filter(|&b| b == b'1').count() as u64
    }
}

/// Concatenated deceptive traps of `trap_len` bits.
///
/// Each block scores `trap_len` when all of its bits are set and
/// `trap_len - 1 - ones` otherwise, so gradients lead towards all zeros while
/// the optimum is all ones. Trailing bits that do not fill a block are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trap {
    traps: usize,
    trap_len: usize,
}

impl Trap {
    pub const DEFAULT_TRAP_LEN: usize = 4;

    pub fn new(traps: usize) -> Self {
        Self::with_trap_len(traps, Self::DEFAULT_TRAP_LEN)
    }

    /// `trap_len` is clamped to at least one bit.
    pub fn with_trap_len(traps: usize, trap_len: usize) -> Self {
        Self {
            traps,
            trap_len: trap_len.max(1),
        }
    }

    /// Length of a chromosome covering every trap.
    pub fn chromosome_len(&self) -> usize {
        self.traps * self.trap_len
    }

    /// Best attainable score.
    pub fn max_score(&self) -> u64 {
        (self.traps * self.trap_len) as u64
    }
}

impl Challenge for Trap {
    fn score(&self, chromosome: &str) -> u64 {
        let len = self.trap_len as u64;
        chromosome
            .as_bytes()
            .chunks_exact(self.trap_len)
            .take(self.traps)
            .map(|block| {
                let ones = block.iter().filter(|&&b| b == b'1').count() as u64;
                if ones == len {
                    len
                } else {
                    len - 1 - ones
                }
            })
            .sum()
    }
}

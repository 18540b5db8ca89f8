//! # Fitness
//!
//! Fitness values arrive from clients as text (a URL path segment). `Fitness`
//! is the typed form the pool works with: a non-negative integer that was
//! parsed exactly, never coerced.
//!
//! ```rust
//! use volunteer_pool::fitness::Fitness;
//!
//! let fitness: Fitness = "12".parse().unwrap();
//! assert_eq!(fitness.value(), 12);
//!
//! assert!("-1".parse::<Fitness>().is_err());
//! assert!("1.5".parse::<Fitness>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PoolError;

/// A caller-supplied, non-negative integer score for a chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Fitness(u64);

impl Fitness {
    /// Wraps an already validated score.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The score as a plain integer.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Fitness {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Fitness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Fitness {
    type Err = PoolError;

    /// Accepts ASCII decimal digits only. `u64::from_str` would also take a
    /// leading `+`, which is rejected here along with signs, decimals and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PoolError::InvalidFitness(format!(
                "'{}' is not a non-negative integer",
                s
            )));
        }

        s.parse::<u64>()
            .map(Fitness)
            .map_err(|e| PoolError::InvalidFitness(format!("'{}': {}", s, e)))
    }
}

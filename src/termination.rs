//! # Termination
//!
//! Decides whether a submitted chromosome solves the problem. The decision
//! only looks at the submitted fitness and the configured target; it never
//! inspects the pool, so it is safe to call before taking any lock.
//!
//! The target is `traps * fitness_per_trap`. With the default of one point
//! per trap, any chromosome whose fitness reaches the trap count wins.
//!
//! ```rust
//! use volunteer_pool::config::Vars;
//! use volunteer_pool::termination::Termination;
//!
//! let termination = Termination::from_vars(&Vars::new(50, 32));
//! assert_eq!(termination.target(), 50);
//!
//! assert!(!termination.is_solution("1111", None));
//! assert!(!termination.is_solution("1111", Some(49)));
//! assert!(termination.is_solution("1111", Some(60)));
//! ```

use crate::config::Vars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Termination {
    target: u64,
}

impl Termination {
    /// A detector that accepts any fitness of at least `target`.
    pub fn new(target: u64) -> Self {
        Self { target }
    }

    /// Derives the target from the configured trap count.
    ///
    /// Saturates instead of overflowing; `Config::validate` rejects
    /// configurations where that would matter.
    pub fn from_vars(vars: &Vars) -> Self {
        Self::new(vars.traps().saturating_mul(vars.fitness_per_trap()))
    }

    /// The lowest fitness that counts as a solution.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Returns `true` iff `fitness` is present and reaches the target.
    ///
    /// The encoding is accepted for symmetry with submissions but does not
    /// influence the decision: fitness is trusted as submitted.
    pub fn is_solution(&self, _encoding: &str, fitness: Option<u64>) -> bool {
        match fitness {
            Some(fitness) => fitness >= self.target,
            None => false,
        }
    }
}

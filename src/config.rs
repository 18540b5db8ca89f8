//! # Config
//!
//! Resolved service configuration, read from the same JSON document the
//! volunteer clients use:
//!
//! ```json
//! {
//!     "repository": "https://github.com/JJ/splash-volunteer",
//!     "vars": { "traps": 50, "cache_size": 32 }
//! }
//! ```
//!
//! `vars.traps` sizes the problem and therefore the winning fitness,
//! `vars.cache_size` is the population size clients are expected to keep
//! the pool above. It is advisory and never enforced. `vars.fitness_per_trap`
//! is the fitness each trap must contribute towards a win; it is optional
//! and defaults to [`DEFAULT_FITNESS_PER_TRAP`], which makes the winning
//! fitness equal to the trap count.
//!
//! ## Example
//!
//! ```rust
//! use volunteer_pool::config::Config;
//!
//! let config = Config::from_json_str(
//!     r#"{ "repository": "https://example.org/repo", "vars": { "traps": 5, "cache_size": 8 } }"#,
//! ).unwrap();
//!
//! assert_eq!(config.vars().traps(), 5);
//! assert_eq!(config.vars().fitness_per_trap(), 1);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PoolError, Result, ResultExt};

/// Fitness each trap contributes to the winning target unless configured.
pub const DEFAULT_FITNESS_PER_TRAP: u64 = 1;

/// The `vars` section of the configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vars {
    traps: u64,
    cache_size: usize,
    #[serde(default = "default_fitness_per_trap")]
    fitness_per_trap: u64,
}

fn default_fitness_per_trap() -> u64 {
    DEFAULT_FITNESS_PER_TRAP
}

impl Vars {
    /// `traps` and `cache_size` with the default fitness per trap.
    pub fn new(traps: u64, cache_size: usize) -> Self {
        Self {
            traps,
            cache_size,
            fitness_per_trap: DEFAULT_FITNESS_PER_TRAP,
        }
    }

    /// Overrides the per-trap fitness used to derive the winning fitness.
    pub fn with_fitness_per_trap(mut self, fitness_per_trap: u64) -> Self {
        self.fitness_per_trap = fitness_per_trap;
        self
    }

    /// Number of traps in the problem.
    pub fn traps(&self) -> u64 {
        self.traps
    }

    /// Advisory population size.
    pub fn cache_size(&self) -> usize {
        self.cache_size
    }

    pub fn fitness_per_trap(&self) -> u64 {
        self.fitness_per_trap
    }
}

/// Resolved service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    repository: String,
    vars: Vars,
}

impl Config {
    /// Builds a configuration without validating it; see [`Config::validate`].
    pub fn new(repository: impl Into<String>, vars: Vars) -> Self {
        Self {
            repository: repository.into(),
            vars,
        }
    }

    /// Parses and validates a configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config {}", path.display()))?;
        Self::from_json_str(&contents)
    }

    /// Checks that the parameters describe a solvable problem.
    pub fn validate(&self) -> Result<()> {
        if self.vars.traps == 0 {
            return Err(PoolError::Configuration(
                "vars.traps must be greater than zero".to_string(),
            ));
        }

        if self.vars.fitness_per_trap == 0 {
            return Err(PoolError::Configuration(
                "vars.fitness_per_trap must be greater than zero".to_string(),
            ));
        }

        if self
            .vars
            .traps
            .checked_mul(self.vars.fitness_per_trap)
            .is_none()
        {
            return Err(PoolError::Configuration(format!(
                "winning fitness {} * {} overflows",
                self.vars.traps, self.vars.fitness_per_trap
            )));
        }

        Ok(())
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn vars(&self) -> &Vars {
        &self.vars
    }
}

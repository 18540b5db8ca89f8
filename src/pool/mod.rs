//! # Pool
//!
//! The shared chromosome pool: a population store, the registry of
//! contributing addresses and the epoch counter, all owned by a
//! [`Coordinator`] that serializes submissions and reads.
//!
//! ## Example
//!
//! ```rust
//! use volunteer_pool::{
//!     config::{Config, Vars},
//!     fitness::Fitness,
//!     pool::{Coordinator, SubmitOutcome},
//! };
//!
//! let vars = Vars::new(1, 8).with_fitness_per_trap(4);
//! let config = Config::new("https://example.org/repo", vars);
//! let pool = Coordinator::new(&config).unwrap();
//!
//! let outcome = pool.submit("0110", Fitness::new(2), "10.0.0.1");
//! assert_eq!(outcome.length(), 1);
//!
//! // One trap worth four points: fitness 4 solves it and starts epoch 1.
//! let outcome = pool.submit("1111", Fitness::new(4), "10.0.0.2");
//! assert_eq!(outcome, SubmitOutcome::Solved { epoch: 1 });
//! assert!(pool.dump_all().is_empty());
//! ```

pub mod contributors;
pub mod coordinator;
pub mod epoch;
pub mod store;

pub use contributors::{ContributorList, ContributorRegistry};
pub use coordinator::{Coordinator, PoolSnapshot, SubmitOutcome};
pub use epoch::EpochSequencer;
pub use store::{ChromosomeEntry, PopulationDump, PopulationStore};

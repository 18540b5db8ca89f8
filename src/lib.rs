pub mod challenge;
pub mod config;
pub mod error;
pub mod fitness;
pub mod pool;
pub mod rng;
pub mod server;
pub mod termination;

// Re-export commonly used types for convenience
pub use config::{Config, Vars};
pub use error::{OptionExt, PoolError, Result, ResultExt};
pub use fitness::Fitness;
pub use pool::{Coordinator, SubmitOutcome};
pub use termination::Termination;

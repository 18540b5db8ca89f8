//! # Error Types
//!
//! This module defines the error type shared by the pool, the configuration
//! loader and the HTTP adapter.
//!
//! Only two kinds of error can come out of the pool itself: sampling an empty
//! population and submitting a fitness that is not a non-negative integer.
//! Everything else is raised while loading configuration or starting the
//! server.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use volunteer_pool::error::{PoolError, Result};
//!
//! fn pick(entries: &[u64]) -> Result<u64> {
//!     entries.first().copied().ok_or(PoolError::EmptyPopulation)
//! }
//!
//! assert!(pick(&[]).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use volunteer_pool::error::{OptionExt, PoolError};
//!
//! fn best(fitnesses: &[u64]) -> volunteer_pool::error::Result<u64> {
//!     fitnesses.iter().max().copied().ok_or_else_pool(|| PoolError::EmptyPopulation)
//! }
//!
//! assert_eq!(best(&[3, 7, 5]).unwrap(), 7);
//! ```
//!
//! Using the `?` operator with automatic error conversion:
//!
//! ```rust
//! use volunteer_pool::error::Result;
//! use std::fs::File;
//! use std::io::Read;
//!
//! fn read_config(path: &str) -> Result<String> {
//!     let mut file = File::open(path)?; // io::Error converts to PoolError
//!     let mut contents = String::new();
//!     file.read_to_string(&mut contents)?;
//!     Ok(contents)
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Errors produced by the chromosome pool and its surroundings.
#[derive(Error, Debug)]
pub enum PoolError {
    /// Sampling was requested while the population holds no chromosomes.
    #[error("Empty population error: no chromosomes present")]
    EmptyPopulation,

    /// A submitted fitness could not be parsed as a non-negative integer.
    #[error("Invalid fitness: {0}")]
    InvalidFitness(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error that occurs when a JSON document cannot be read or written.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

impl PoolError {
    /// Returns `true` for errors caused by the caller's input rather than by
    /// the service, i.e. errors that leave the pool untouched.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PoolError::EmptyPopulation | PoolError::InvalidFitness(_))
    }
}

/// A specialized Result type for pool operations.
pub type Result<T> = std::result::Result<T, PoolError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use volunteer_pool::error::ResultExt;
/// use std::fs::File;
///
/// fn open(path: &str) -> volunteer_pool::error::Result<()> {
///     File::open(path).context("Failed to open configuration")?;
///     Ok(())
/// }
///
/// assert!(open("/definitely/not/here.json").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `PoolError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| PoolError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, PoolError>` using `err_fn`
    /// to build the error.
    fn ok_or_else_pool<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> PoolError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_pool<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> PoolError,
    {
        self.ok_or_else(err_fn)
    }
}

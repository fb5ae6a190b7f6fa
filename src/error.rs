//! Crate-level error type.
//!
//! Data-structure operations report failure through `bool` or `Option` returns;
//! this type only covers loading and validating configuration.

use thiserror::Error;

/// Errors raised while building a structure from configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The load factor is not a finite value in `(0, 1]`.
    #[error("load factor {0} is out of range, expected a value in (0, 1]")]
    InvalidLoadFactor(f64),

    /// The fallback probe offset is not a 4k + 3 prime.
    #[error("default quotient {0} is not a 4k + 3 prime")]
    InvalidDefaultQuotient(usize),

    /// A graph was configured without any vertex slots.
    #[error("graph capacity must be at least one vertex")]
    EmptyGraph,

    /// The configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias used by the configuration layer.
pub type Result<T> = core::result::Result<T, Error>;

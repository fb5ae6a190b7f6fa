//! Tunable settings for the structures that have any.
//!
//! Both configs deserialize from JSON with every field optional; missing fields
//! fall back to the textbook defaults.
//!
//! ```rust
//! use classics::config::{HashTableConfig, Validate};
//!
//! let config = HashTableConfig::from_json_str(r#"{ "load_factor": 0.5 }"#).unwrap();
//! assert_eq!(config.load_factor, 0.5);
//! assert_eq!(config.default_quotient, 9967);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::collections::hash::primes::is_four_k_plus_3_prime;
use crate::error::{Error, Result};

/// Load factor at which the hash table refuses further inserts.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Probe offset used when the quotient of a pseudo key is degenerate.
pub const DEFAULT_QUOTIENT: usize = 9967;

/// Checks a configuration for values the structures cannot work with.
pub trait Validate {
    /// Returns the first problem found, if any.
    fn validate(&self) -> Result<()>;
}

/// Settings for [`LqHashTable`](crate::collections::hash::LqHashTable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashTableConfig {
    /// Inserts are rejected once `size / capacity` reaches this ratio.
    pub load_factor: f64,

    /// Offset used when `quotient % capacity == 0`. Must be a 4k + 3 prime.
    pub default_quotient: usize,

    /// Start the size counter at the requested capacity instead of zero.
    ///
    /// The classic formulation seeds the counter this way, which makes the
    /// table reach its load threshold after far fewer inserts than requested.
    pub preseed_size: bool,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            load_factor: DEFAULT_LOAD_FACTOR,
            default_quotient: DEFAULT_QUOTIENT,
            preseed_size: true,
        }
    }
}

impl HashTableConfig {
    /// Parses a config from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Extra capacity, in whole percent, implied by the load factor.
    ///
    /// A load factor of 0.75 gives 33.
    pub fn inflation_percent(&self) -> usize {
        // Truncation is part of the sizing rule.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = ((1.0 / self.load_factor - 1.0) * 100.0) as usize;
        pct
    }
}

impl Validate for HashTableConfig {
    fn validate(&self) -> Result<()> {
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 || self.load_factor > 1.0 {
            return Err(Error::InvalidLoadFactor(self.load_factor));
        }
        if !is_four_k_plus_3_prime(self.default_quotient) {
            return Err(Error::InvalidDefaultQuotient(self.default_quotient));
        }
        Ok(())
    }
}

/// Settings for [`MatrixGraph`](crate::graph::MatrixGraph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of vertex slots (and the side length of the adjacency matrix).
    pub max_vertices: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { max_vertices: 16 }
    }
}

impl GraphConfig {
    /// Parses a config from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Validate for GraphConfig {
    fn validate(&self) -> Result<()> {
        if self.max_vertices == 0 {
            return Err(Error::EmptyGraph);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(HashTableConfig::default().validate().is_ok());
        assert!(GraphConfig::default().validate().is_ok());
        assert_eq!(HashTableConfig::default().inflation_percent(), 33);
    }

    #[test]
    fn test_rejects_bad_load_factor() {
        for lf in [0.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            let config = HashTableConfig {
                load_factor: lf,
                ..HashTableConfig::default()
            };
            assert!(matches!(config.validate(), Err(Error::InvalidLoadFactor(_))));
        }
    }

    #[test]
    fn test_rejects_bad_quotient() {
        // 9973 is prime but 1 mod 4; 15 is 3 mod 4 but composite.
        for q in [9973, 15, 0, 1] {
            let config = HashTableConfig {
                default_quotient: q,
                ..HashTableConfig::default()
            };
            assert!(matches!(config.validate(), Err(Error::InvalidDefaultQuotient(_))));
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = HashTableConfig::from_json_str(r#"{ "preseed_size": false }"#).unwrap();
        assert!(!config.preseed_size);
        assert_eq!(config.load_factor, DEFAULT_LOAD_FACTOR);

        let graph = GraphConfig::from_json_str("{}").unwrap();
        assert_eq!(graph, GraphConfig::default());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(HashTableConfig::from_json_str("{ nope"), Err(Error::Parse(_))));
    }
}

//! Hash-based collections.
//!
//! - `fold`: string → pseudo key preprocessing
//! - `primes`: 4k + 3 prime table sizing
//! - `lq_hash_table`: the linear-quotient open-addressing table

pub mod fold;
pub mod lq_hash_table;
pub mod primes;

pub use lq_hash_table::{LqHashTable, Probe, Slot};

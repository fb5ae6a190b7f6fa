//! `LqHashTable`: an open-addressing string set with linear-quotient probing.
//!
//! Keys are preprocessed into pseudo keys by [`fold_shift`], placed by division
//! hashing (`pk % N`) and, on collision, stepped by the quotient `pk / N`. When
//! the quotient is a multiple of `N` the step would be zero, so a fixed 4k + 3
//! prime (9967 by default) is used instead.
//!
//! Deleted entries leave a tombstone behind so that later probes keep walking
//! past them; inserts reuse tombstones.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert` | \(O(N)\) worst case | First empty or tombstone slot on the probe |
//! | `fetch` | \(O(N)\) worst case | Stops at the first empty slot |
//! | `delete` | \(O(N)\) worst case | Same probe as `fetch` |
//! | `update` | \(O(N)\) | `delete` then `insert`, no rollback |

use core::fmt;

use super::fold::fold_shift;
use super::primes::four_k_plus_3;
use crate::config::{HashTableConfig, Validate};
use crate::error::Result;

/// State of one slot of primary storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot {
    /// Never held a key; terminates searches.
    #[default]
    Empty,
    /// Holds a live key.
    Occupied(String),
    /// Held a key that has since been deleted; searches continue past it.
    Tombstone,
}

impl Slot {
    /// Returns the stored key, if the slot is occupied.
    pub fn key(&self) -> Option<&str> {
        match self {
            Slot::Occupied(key) => Some(key),
            _ => None,
        }
    }

    fn is_available(&self) -> bool {
        matches!(self, Slot::Empty | Slot::Tombstone)
    }
}

/// The sequence of slot indices examined for one pseudo key.
///
/// Yields at most `N` indices: `ip`, `ip + offset`, `ip + 2·offset`, … (mod `N`).
#[derive(Debug, Clone)]
pub struct Probe {
    index: usize,
    offset: usize,
    capacity: usize,
    remaining: usize,
}

impl Probe {
    /// Builds the probe for `pseudo_key` in a table of `capacity` slots.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub(crate) fn new(pseudo_key: u32, capacity: usize, default_quotient: usize) -> Self {
        assert!(capacity > 0, "probe over an empty table");
        let pk = pseudo_key as usize;
        let quotient = pk / capacity;
        let offset = if quotient % capacity == 0 {
            default_quotient
        } else {
            quotient
        };
        Self {
            index: pk % capacity,
            offset: offset % capacity,
            capacity,
            remaining: capacity,
        }
    }

    /// Distance between consecutive probes, reduced mod `N`.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Probe {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.index;
        self.index = (self.index + self.offset) % self.capacity;
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Probe {}

/// Fixed-capacity string table using linear-quotient collision resolution.
#[derive(Clone)]
pub struct LqHashTable {
    slots: Box<[Slot]>,
    /// Load accounting counter; see [`LqHashTable::size`].
    size: usize,
    /// Number of occupied slots.
    live: usize,
    max_load_factor: f64,
    default_quotient: usize,
}

impl LqHashTable {
    /// Creates a table meant to hold `target_capacity` keys, with default settings.
    pub fn new(target_capacity: usize) -> Self {
        Self::build(target_capacity, &HashTableConfig::default())
    }

    /// Creates a table with explicit settings.
    ///
    /// # Errors
    /// Returns an error if the config fails [`Validate::validate`].
    pub fn with_config(target_capacity: usize, config: &HashTableConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(target_capacity, config))
    }

    fn build(target_capacity: usize, config: &HashTableConfig) -> Self {
        let mut capacity = four_k_plus_3(target_capacity, config.inflation_percent());
        // A table as large as the fallback quotient would reduce it to a zero step.
        if config.default_quotient % capacity == 0 {
            capacity = four_k_plus_3(capacity + 1, 0);
        }
        let size = if config.preseed_size { target_capacity } else { 0 };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target_capacity,
            capacity,
            load_factor = config.load_factor,
            preseeded = config.preseed_size,
            "sized linear-quotient table"
        );
        Self {
            slots: vec![Slot::Empty; capacity].into_boxed_slice(),
            size,
            live: 0,
            max_load_factor: config.load_factor,
            default_quotient: config.default_quotient,
        }
    }

    /// Number of slots in primary storage (`N`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The load accounting counter.
    ///
    /// With the default config this starts at the target capacity passed to
    /// [`LqHashTable::new`], not at zero, and moves by one per successful
    /// insert or delete.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of keys actually stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if no keys are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Current `size / N` ratio compared against the load factor.
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Number of tombstones currently in storage.
    pub fn tombstones(&self) -> usize {
        self.slots.iter().filter(|s| **s == Slot::Tombstone).count()
    }

    /// Returns the slot at `index` for inspection.
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// The probe sequence this table would walk for `key`.
    pub fn probe(&self, key: &str) -> Probe {
        Probe::new(fold_shift(key), self.capacity(), self.default_quotient)
    }

    /// Inserts `key`, returning `false` if the table is at its load factor or
    /// no free slot was found within `N` probes.
    ///
    /// Does not check for an existing copy of `key`.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.load_factor() >= self.max_load_factor {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                key = %key,
                size = self.size,
                capacity = self.capacity(),
                "insert rejected at load factor"
            );
            return false;
        }

        let Some(index) = self.probe(&key).find(|&i| self.slots[i].is_available()) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(key = %key, "insert found no free slot");
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(key = %key, index, "inserted");
        self.slots[index] = Slot::Occupied(key);
        self.size += 1;
        self.live += 1;
        true
    }

    /// Looks up `key`, returning the stored copy.
    pub fn fetch(&self, key: &str) -> Option<&str> {
        let index = self.locate(key)?;
        self.slots[index].key()
    }

    /// Returns `true` if `key` is stored.
    pub fn contains(&self, key: &str) -> bool {
        self.locate(key).is_some()
    }

    /// Replaces `key` with a tombstone.
    pub fn delete(&mut self, key: &str) -> bool {
        let Some(index) = self.locate(key) else {
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(key, index, "deleted");
        self.slots[index] = Slot::Tombstone;
        self.size -= 1;
        self.live -= 1;
        true
    }

    /// Deletes `key` and inserts `new_key`.
    ///
    /// If the delete succeeds but the insert does not, `key` stays deleted.
    pub fn update(&mut self, key: &str, new_key: impl Into<String>) -> bool {
        if !self.delete(key) {
            return false;
        }
        let inserted = self.insert(new_key);
        if !inserted {
            #[cfg(feature = "tracing")]
            tracing::debug!(key, "update dropped the old key");
        }
        inserted
    }

    /// Iterates over stored keys in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().filter_map(Slot::key)
    }

    /// Walks the probe for `key` until a match or an empty slot.
    fn locate(&self, key: &str) -> Option<usize> {
        for index in self.probe(key) {
            match &self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(stored) if stored == key => return Some(index),
                _ => {}
            }
        }
        None
    }
}

impl fmt::Debug for LqHashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LqHashTable")
            .field("capacity", &self.capacity())
            .field("size", &self.size)
            .field("len", &self.live)
            .field("tombstones", &self.tombstones())
            .finish()
    }
}

//! Bounded record storage for fractions and equations.
//!
//! A `RecordStore` is append-only with a fixed capacity: no deletion, no
//! reordering, 0-based indexed retrieval equal to insertion order. The
//! session owns one store per entity kind; both share the same capacity
//! bound by default.

use frac_core::{Equation, Fraction};
use thiserror::Error;
use tracing::debug;

/// Capacity bound used when no configuration overrides it.
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store already holds `capacity` records; the insertion is not
    /// performed.
    #[error("record store full: capacity {capacity} reached")]
    CapacityExceeded { capacity: usize },
    /// Index past the last stored record.
    #[error("index {index} out of range: {len} records stored")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Bounded append-only collection with insertion-order retrieval.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    entries: Vec<T>,
    capacity: usize,
}

impl<T> RecordStore<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// True iff there is room for one more record.
    pub fn can_store(&self) -> bool {
        self.entries.len() < self.capacity
    }

    /// Appends a record, rejecting the insertion when the store is full.
    pub fn store(&mut self, record: T) -> Result<(), StoreError> {
        if !self.can_store() {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.entries.push(record);
        debug!(len = self.entries.len(), "stored record");
        Ok(())
    }

    /// Gets the record at `index` (0-based, equal to insertion order).
    pub fn get(&self, index: usize) -> Result<&T, StoreError> {
        self.entries.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[T] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Session-wide stores, owned by the REPL and passed where needed.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub fractions: RecordStore<Fraction>,
    pub equations: RecordStore<Equation>,
}

impl SessionState {
    /// Both stores get the same capacity but count independently.
    pub fn new(capacity: usize) -> Self {
        Self {
            fractions: RecordStore::with_capacity(capacity),
            equations: RecordStore::with_capacity(capacity),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

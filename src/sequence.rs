//! Growable numeric sequence with exact doubling growth.
//!
//! The sequence keeps its own logical capacity so the growth policy is part
//! of its observable behaviour: a sequence created with capacity `C` holds
//! `C` values without growing and doubles to `2C` on the next append.

use crate::{Error, Result};
use serde::{Serialize, Serializer};
use tracing::trace;

/// Owned, ordered sequence of floating-point values
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSequence {
    values: Vec<f64>,
    capacity: usize,
    released: bool,
}

impl NumericSequence {
    /// Create an empty sequence able to hold `capacity` values before growing
    pub fn create(capacity: usize) -> Result<Self> {
        let mut values = Vec::new();
        values
            .try_reserve_exact(capacity)
            .map_err(|e| Error::allocation_failure(capacity, Some(e)))?;

        Ok(Self {
            values,
            capacity,
            released: false,
        })
    }

    /// Append a value, doubling capacity first when the sequence is full
    ///
    /// If growth fails the storage is released and the sequence refuses all
    /// further appends.
    pub fn append(&mut self, value: f64) -> Result<()> {
        if self.released {
            return Err(Error::allocation_failure(0, None));
        }

        if self.values.len() == self.capacity {
            self.grow()?;
        }

        self.values.push(value);
        Ok(())
    }

    fn grow(&mut self) -> Result<()> {
        let new_capacity = match self.capacity {
            0 => 1,
            capacity => match capacity.checked_mul(2) {
                Some(doubled) => doubled,
                None => {
                    self.release();
                    return Err(Error::allocation_failure(usize::MAX, None));
                }
            },
        };

        let additional = new_capacity - self.values.len();
        if let Err(e) = self.values.try_reserve_exact(additional) {
            self.release();
            return Err(Error::allocation_failure(new_capacity, Some(e)));
        }

        trace!("Sequence grown from {} to {}", self.capacity, new_capacity);
        self.capacity = new_capacity;
        Ok(())
    }

    fn release(&mut self) {
        self.values = Vec::new();
        self.capacity = 0;
        self.released = true;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Logical capacity under the doubling policy
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether a failed growth step released the storage
    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn first(&self) -> Result<f64> {
        self.values
            .first()
            .copied()
            .ok_or_else(|| Error::empty_sequence("first"))
    }

    pub fn last(&self) -> Result<f64> {
        self.values
            .last()
            .copied()
            .ok_or_else(|| Error::empty_sequence("last"))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }
}

impl<'a> IntoIterator for &'a NumericSequence {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Serialize for NumericSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values.iter())
    }
}

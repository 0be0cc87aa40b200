// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Open-addressing set of sequence numbers.
//!
//! The orbit engine needs a set it can fill with at most NDIGITS! keys, test
//! many times per key, and empty once per seed. This set is sized once for
//! that bound and never grows; it supports insert, contains and clear, and
//! nothing else.
//!
//! # Hashing
//!
//! - Home slot: `key mod capacity`
//! - Probe step: `(key mod (NDIGITS − 1)) + 1`
//!
//! The probe step is independent of the home slot, so keys that collide at
//! home spread out along different strides. Probing wraps modulo capacity
//! and gives up after visiting `capacity` slots.
//!
//! Every probe step lies in `1..NDIGITS`, and the capacity is rounded up to
//! have no divisor in `2..NDIGITS`. Each stride is then coprime with the
//! capacity, so a probe sequence visits every slot before repeating.

use crate::codec::SequenceNumber;
use crate::errors::CensusError;
use crate::geometry::constants::NDIGITS;
use num_traits::{ToPrimitive, Zero};

/// A fixed-capacity set of arbitrary-precision keys.
#[derive(Debug, Clone)]
pub struct BigHashSet {
    keys: Vec<SequenceNumber>,
    /// Kept apart from `keys` so that clearing does not touch the numbers.
    occupied: Vec<bool>,
    count: usize,
}

impl BigHashSet {
    /// Allocate a set with at least `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, CensusError> {
        let capacity = coprime_capacity(capacity);
        let mut keys = Vec::new();
        keys.try_reserve_exact(capacity)
            .map_err(CensusError::allocation("hash set keys"))?;
        keys.resize_with(capacity, SequenceNumber::zero);
        let mut occupied = Vec::new();
        occupied
            .try_reserve_exact(capacity)
            .map_err(CensusError::allocation("hash set occupancy"))?;
        occupied.resize(capacity, false);
        Ok(Self {
            keys,
            occupied,
            count: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Insert a key the caller knows is absent.
    ///
    /// Inserting a key twice stores it twice.
    pub fn insert(&mut self, key: &SequenceNumber) -> Result<(), CensusError> {
        let capacity = self.capacity();
        let mut index = self.home(key);
        if self.occupied[index] {
            let step = probe_step(key);
            let mut probes = 1;
            while self.occupied[index] {
                if probes == capacity {
                    return Err(CensusError::TableFull { capacity });
                }
                index = (index + step) % capacity;
                probes += 1;
            }
        }
        self.keys[index].clone_from(key);
        self.occupied[index] = true;
        self.count += 1;
        Ok(())
    }

    /// Whether the key has been inserted since the last clear.
    pub fn contains(&self, key: &SequenceNumber) -> bool {
        let capacity = self.capacity();
        let mut index = self.home(key);
        if !self.occupied[index] {
            return false;
        }
        if self.keys[index] == *key {
            return true;
        }
        let step = probe_step(key);
        for _ in 1..capacity {
            index = (index + step) % capacity;
            if !self.occupied[index] {
                return false;
            }
            if self.keys[index] == *key {
                return true;
            }
        }
        false
    }

    /// Forget every key without releasing storage. O(capacity).
    pub fn clear(&mut self) {
        self.occupied.fill(false);
        self.count = 0;
    }

    fn home(&self, key: &SequenceNumber) -> usize {
        residue(key, self.capacity())
    }
}

/// The smallest size `>= requested` with no divisor in `2..NDIGITS`.
fn coprime_capacity(requested: usize) -> usize {
    let mut capacity = requested.max(1);
    while (2..NDIGITS).any(|step| capacity % step == 0) {
        capacity += 1;
    }
    capacity
}

fn probe_step(key: &SequenceNumber) -> usize {
    residue(key, NDIGITS - 1) + 1
}

fn residue(key: &SequenceNumber, modulus: usize) -> usize {
    // The remainder is below `modulus`, so it always fits.
    (key % modulus as u64).to_usize().unwrap_or_default()
}

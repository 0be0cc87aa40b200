// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sequence numbers: step sequences as base-NDIGITS integers.
//!
//! A sequence `s[0] s[1] ... s[LEN-1]` in index form is read as a number
//! with `s[0]` the most significant digit. Equal sequences have equal
//! numbers, so the numbers serve as hash keys when deduplicating orbits.
//!
//! # Rotation
//!
//! Moving the leading digit `f` of `N` to the end gives
//!
//! ```text
//! N' = N·n − f·(n^LEN − 1)
//! ```
//!
//! The right-hand constants only depend on `f`, so [`MultiplesTable`] stores
//! them once and a rotation costs one small multiplication and one
//! subtraction, whatever the sequence.

use crate::geometry::constants::{LEN, NDIGITS};
use crate::geometry::Step;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// The arbitrary-precision encoding of a step sequence.
pub type SequenceNumber = BigUint;

/// Encode a sequence (index form) by Horner's method.
pub fn encode(steps: &[Step]) -> SequenceNumber {
    let mut number = SequenceNumber::zero();
    encode_into(steps, &mut number);
    number
}

/// Encode into an existing number, reusing its allocation.
pub fn encode_into(steps: &[Step], number: &mut SequenceNumber) {
    number.set_zero();
    for &step in steps {
        *number *= NDIGITS as u32;
        *number += step as u32;
    }
}

/// Recover the LEN-digit sequence from its number.
///
/// Returns `None` if the number has more than LEN base-NDIGITS digits.
pub fn decode(number: &SequenceNumber) -> Option<Vec<Step>> {
    if number.is_zero() {
        return Some(vec![0; LEN]);
    }
    let digits = number.to_radix_be(NDIGITS as u32);
    if digits.len() > LEN {
        return None;
    }
    let mut steps = vec![0; LEN - digits.len()];
    steps.extend(digits);
    Some(steps)
}

/// Precomputed multiples `f·(n^LEN − 1)` for every leading digit `f`.
#[derive(Debug, Clone)]
pub struct MultiplesTable {
    multiples: Vec<SequenceNumber>,
}

impl MultiplesTable {
    pub fn new() -> Self {
        let base = SequenceNumber::from(NDIGITS as u32);
        let period = base.pow(LEN as u32) - SequenceNumber::one();
        let multiples = (0..NDIGITS as u32).map(|f| &period * f).collect();
        Self { multiples }
    }

    /// The constant subtracted when `leading` is rotated out.
    pub fn multiple(&self, leading: Step) -> &SequenceNumber {
        &self.multiples[leading as usize]
    }

    /// Rotate `number` left by one digit in place.
    ///
    /// `leading` must be the number's current most significant digit.
    #[inline]
    pub fn rotate(&self, number: &mut SequenceNumber, leading: Step) {
        *number *= NDIGITS as u32;
        *number -= self.multiple(leading);
    }
}

impl Default for MultiplesTable {
    fn default() -> Self {
        Self::new()
    }
}

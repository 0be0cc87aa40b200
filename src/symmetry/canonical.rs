// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical-form test.
//!
//! A sequence accepted by a partition's search is a seed when no rotation of
//! any relabeling of it, brought into that partition's prefix, is strictly
//! lower. Only rotations whose opening window can be relabeled to the prefix
//! need to be examined; for those, the prefix fixes the relabeling of its own
//! digits and the partition's free-digit swap queue enumerates the rest.

use crate::engine::predicate::{Partition, Window};
use crate::geometry::constants::LEN;
use crate::geometry::{relabel, StepMask};
use crate::memo::{MemoizedData, SwapQueue};
use std::cmp::Ordering;

/// Strict positional order on mask sequences of equal length.
///
/// The first position where the two differ decides. Equal sequences are not
/// lower.
#[inline]
pub fn is_lower(candidate: &[StepMask], original: &[StepMask]) -> bool {
    candidate.cmp(original) == Ordering::Less
}

/// Reusable canonical-form test for one partition.
pub struct CanonicalTest<'a> {
    prefix: Vec<StepMask>,
    aligns: Window,
    free_relabelings: &'a SwapQueue<StepMask>,
    /// The sequence twice over, so that every rotation is a contiguous window.
    doubled: Vec<StepMask>,
}

impl<'a> CanonicalTest<'a> {
    pub fn new(partition: &Partition, memo: &'a MemoizedData) -> Self {
        Self {
            prefix: partition.prefix_masks(),
            aligns: partition.aligns,
            free_relabelings: memo.free_relabelings(partition.free),
            doubled: Vec::with_capacity(2 * LEN),
        }
    }

    /// Whether `sequence` (LEN masks) is the representative of its class.
    ///
    /// Relabelings accumulate in the scratch copy across rotations. That is
    /// harmless: `aligns` only looks at equality patterns, and the prefix
    /// match re-derives the relabeling of the prefix digits each time.
    pub fn is_canonical(&mut self, sequence: &[StepMask]) -> bool {
        debug_assert_eq!(sequence.len(), LEN);
        self.doubled.clear();
        self.doubled.extend_from_slice(sequence);
        self.doubled.extend_from_slice(sequence);

        for offset in 0..LEN {
            if !(self.aligns)(&self.doubled[offset..]) {
                continue;
            }

            for i in 0..self.prefix.len() {
                let have = self.doubled[offset + i];
                let want = self.prefix[i];
                if have != want {
                    relabel(&mut self.doubled, have, want);
                }
            }
            if is_lower(&self.doubled[offset..offset + LEN], sequence) {
                return false;
            }

            for &(a, b) in self.free_relabelings.swaps() {
                relabel(&mut self.doubled, a, b);
                if is_lower(&self.doubled[offset..offset + LEN], sequence) {
                    return false;
                }
            }
        }
        true
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed tables (immutable).
//!
//! These tables are built once on the coordinating thread, before any worker
//! starts, and are only ever read afterwards. Workers borrow them, so no
//! locking is needed.

pub mod lowest;
pub mod swaps;

pub use lowest::lowest_sequence;
pub use swaps::SwapQueue;

use crate::codec::MultiplesTable;
use crate::errors::CensusError;
use crate::geometry::constants::{validate_digits, NDIGITS, PERMUTATIONS};
use crate::geometry::{mask_of, Step, StepMask};
use tracing::debug;

/// Which digits a partition leaves free to relabel once its prefix is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreeDigits {
    /// The prefix uses digits 0..=2; digits 3..NDIGITS are free.
    AboveTwo,
    /// The prefix uses digits 0..=3; digits 4..NDIGITS are free.
    AboveThree,
}

/// All immutable data shared by the search and extrapolation workers.
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// The lowest candidate sequence in mask form; refills the search tail.
    pub lowest: Vec<StepMask>,

    /// Rotation constants for sequence numbers.
    pub multiples: MultiplesTable,

    /// Every relabeling of all NDIGITS digits, in index form.
    pub relabelings: SwapQueue<Step>,

    /// Relabelings of digits 3.., in mask form.
    pub free_above_two: SwapQueue<StepMask>,

    /// Relabelings of digits 4.., in mask form.
    pub free_above_three: SwapQueue<StepMask>,
}

impl MemoizedData {
    /// Validate the configured digit count and build every table.
    pub fn new() -> Result<Self, CensusError> {
        validate_digits(NDIGITS)?;

        let lowest = lowest_sequence();
        let multiples = MultiplesTable::new();
        let relabelings = SwapQueue::build(&(0..NDIGITS as Step).collect::<Vec<_>>());
        let free_above_two = SwapQueue::build(&free_masks(3));
        let free_above_three = SwapQueue::build(&free_masks(4));

        debug!(
            "[MemoizedData] {} relabelings, {} + {} free-digit relabelings",
            relabelings.permutations(),
            free_above_two.permutations(),
            free_above_three.permutations()
        );
        debug_assert_eq!(relabelings.permutations(), PERMUTATIONS);

        Ok(Self {
            lowest,
            multiples,
            relabelings,
            free_above_two,
            free_above_three,
        })
    }

    /// The relabelings a partition applies after matching its prefix.
    pub fn free_relabelings(&self, free: FreeDigits) -> &SwapQueue<StepMask> {
        match free {
            FreeDigits::AboveTwo => &self.free_above_two,
            FreeDigits::AboveThree => &self.free_above_three,
        }
    }
}

/// Masks of digits `first..NDIGITS`, highest first.
fn free_masks(first: usize) -> Vec<StepMask> {
    (first..NDIGITS).rev().map(|d| mask_of(d as Step)).collect()
}

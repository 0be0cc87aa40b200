// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search partitions and their window predicates.
//!
//! Every cyclic Gray code can be rotated and relabeled so that it starts
//! with one of five fixed prefixes. Each partition owns one prefix, and the
//! search for it runs on its own thread:
//!
//! | prefix  | wraparound reach | free digits |
//! |---------|------------------|-------------|
//! | `01020` | none (the long partition) | 3.. |
//! | `01021` | 4 | 3.. |
//! | `01023` | 4 | 4.. |
//! | `0120`  | 2 | 3.. |
//! | `0123`  | 3 | 4.. |
//!
//! Partitions are ordered: a code belongs to the first partition whose prefix
//! it can be relabeled to start with, at any rotation. Two predicates,
//! written as equality patterns on a short window of masks, encode this:
//!
//! - `aligns`: can the window starting here be relabeled to this prefix?
//! - `covered`: does the window ending here relabel to an earlier prefix?
//!
//! Equality patterns are preserved by relabeling, which is what makes both
//! tests independent of the digits actually present.

use crate::geometry::{mask_of, Step, StepMask};
use crate::memo::FreeDigits;
use std::fmt;

/// A predicate on a short window of masks.
pub type Window = fn(&[StepMask]) -> bool;

/// Look-behind test for branches owned by an earlier partition.
#[derive(Clone, Copy)]
pub struct LowerCheck {
    /// How many positions before the cursor the window starts.
    pub reach: usize,
    /// Given `window[0..=reach]`, with the cursor at `window[reach]`.
    pub covered: Window,
}

/// One search partition: a fixed prefix and its predicates.
#[derive(Clone, Copy)]
pub struct Partition {
    /// The fixed prefix, in index form.
    pub prefix: &'static [Step],
    /// Given a window starting at a rotation, whether it relabels to `prefix`.
    pub aligns: Window,
    /// Pruning for partitions that are not first.
    pub lower: Option<LowerCheck>,
    /// Digits left free once `prefix` has been matched.
    pub free: FreeDigits,
}

impl Partition {
    /// The prefix in mask form.
    pub fn prefix_masks(&self) -> Vec<StepMask> {
        self.prefix.iter().map(|&step| mask_of(step)).collect()
    }

    /// Look-behind of the lower check, or 0.
    pub fn reach(&self) -> usize {
        self.lower.map_or(0, |lower| lower.reach)
    }

    /// The prefix written as digits, e.g. `01021`.
    pub fn name(&self) -> String {
        self.prefix.iter().map(|step| step.to_string()).collect()
    }
}

impl fmt::Debug for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition")
            .field("prefix", &self.name())
            .field("reach", &self.reach())
            .field("free", &self.free)
            .finish()
    }
}

/// Index of the unrestricted partition, whose seed list is the largest.
pub const LONG_PARTITION: usize = 0;

/// The partitions, in priority order.
pub static PARTITIONS: [Partition; 5] = [
    Partition {
        prefix: &[0, 1, 0, 2, 0],
        aligns: |w| w[0] == w[2] && w[2] == w[4],
        lower: None,
        free: FreeDigits::AboveTwo,
    },
    Partition {
        prefix: &[0, 1, 0, 2, 1],
        aligns: |w| w[0] == w[2] && w[1] == w[4],
        // 0?0?0 belongs to 01020
        lower: Some(LowerCheck {
            reach: 4,
            covered: |w| w[0] == w[2] && w[2] == w[4],
        }),
        free: FreeDigits::AboveTwo,
    },
    Partition {
        prefix: &[0, 1, 0, 2, 3],
        aligns: |w| w[0] == w[2] && w[4] != w[0] && w[4] != w[1],
        // 0?0?0 belongs to 01020, 010?1 to 01021
        lower: Some(LowerCheck {
            reach: 4,
            covered: |w| w[0] == w[2] && (w[4] == w[0] || w[4] == w[1]),
        }),
        free: FreeDigits::AboveThree,
    },
    Partition {
        prefix: &[0, 1, 2, 0],
        aligns: |w| w[0] == w[3],
        // 0?0 belongs to the 010 partitions
        lower: Some(LowerCheck {
            reach: 2,
            covered: |w| w[0] == w[2],
        }),
        free: FreeDigits::AboveTwo,
    },
    Partition {
        prefix: &[0, 1, 2, 3],
        aligns: |w| w[0] != w[2] && w[3] != w[0] && w[3] != w[1],
        // 0?0 belongs to the 010 partitions, 0??0 to 0120
        lower: Some(LowerCheck {
            reach: 3,
            covered: |w| w[0] == w[2] || w[0] == w[3],
        }),
        free: FreeDigits::AboveThree,
    },
];

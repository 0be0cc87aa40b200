// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The lowest candidate sequence.
//!
//! Every backtracking reset refills the tail of the search buffer from this
//! table, so it must be the smallest mask sequence with no step immediately
//! repeated (a repeat would undo the previous toggle and revisit a value).
//!
//! # Construction
//!
//! Start with the single mask `1`. Then, NDIGITS times, copy the block built
//! so far after itself and double the last mask of the copy:
//!
//! ```text
//! 1
//! 1 2
//! 1 2 1 4
//! 1 2 1 4 1 2 1 8
//! ```
//!
//! The final doubling overshoots to `1 << NDIGITS`, which is not a digit, so
//! the last mask is halved back. The result, in index form, is the reflected
//! binary Gray code `0102010301020103` (for NDIGITS=4).

use crate::geometry::constants::{LEN, NDIGITS};
use crate::geometry::StepMask;

/// Build the lowest candidate sequence in mask form.
pub fn lowest_sequence() -> Vec<StepMask> {
    // Built wider than StepMask so the overshooting doubling cannot wrap.
    let mut lowest = vec![0u32; LEN];
    lowest[0] = 1;
    let mut filled = 1;
    for _ in 0..NDIGITS {
        lowest.copy_within(0..filled, filled);
        lowest[2 * filled - 1] <<= 1;
        filled *= 2;
    }
    lowest[LEN - 1] >>= 1;
    lowest.into_iter().map(|mask| mask as StepMask).collect()
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Step sequences.
//!
//! A sequence of LEN steps describes a walk from 0 that toggles one bit per
//! step. It is a cyclic Gray code when the walk visits every value in
//! 0..LEN exactly once and the last step returns it to 0.

use crate::geometry::constants::{LEN, NDIGITS};
use crate::geometry::step::Step;

/// A complete step sequence in index form.
pub type Sequence = [Step; LEN];

/// Check the Gray code invariant for a step sequence of any length.
///
/// The walk starts at 0 and XORs in `1 << step` at each position. The
/// sequence is valid when it has exactly `2^NDIGITS` steps, every step is a
/// digit below NDIGITS, every value is reached exactly once, and the final
/// step returns to 0.
pub fn is_gray_code(steps: &[Step]) -> bool {
    if steps.len() != LEN {
        return false;
    }
    let mut seen = [false; LEN];
    let mut value = 0usize;
    for (position, &step) in steps.iter().enumerate() {
        if step as usize >= NDIGITS {
            return false;
        }
        value ^= 1 << step;
        if value == 0 {
            return position == LEN - 1;
        }
        if seen[value] {
            return false;
        }
        seen[value] = true;
    }
    false
}

/// Whether the sequence is invariant under rotation by half its length.
///
/// Such a sequence has only LEN/2 distinct rotations.
pub fn is_half_symmetric(steps: &[Step]) -> bool {
    let (front, back) = steps.split_at(steps.len() / 2);
    front == back
}

/// The sequence rotated left by `offset` positions.
pub fn rotated(steps: &[Step], offset: usize) -> Vec<Step> {
    let mut out = steps.to_vec();
    out.rotate_left(offset % steps.len().max(1));
    out
}

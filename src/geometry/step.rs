// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Step and step-mask representations.
//!
//! A step is the index of the bit toggled at one position of a Gray code.
//! The seed search works on masks (`1 << step`), which make the mixed-radix
//! increment a single shift; the codec and the orbit engine work on indices,
//! which are the base-NDIGITS digits of a sequence number.

use crate::geometry::constants::NDIGITS;

/// A digit index in the range 0..NDIGITS.
pub type Step = u8;

/// A step represented as a single set bit.
pub type StepMask = u16;

/// Convert a step index to its mask.
#[inline]
pub fn mask_of(step: Step) -> StepMask {
    debug_assert!((step as usize) < NDIGITS, "Step out of range: {}", step);
    1 << step
}

/// Convert a single-bit mask back to its step index (log2 of the mask).
#[inline]
pub fn step_of(mask: StepMask) -> Step {
    debug_assert!(mask.is_power_of_two(), "Not a step mask: {:#b}", mask);
    mask.trailing_zeros() as Step
}

/// Convert a mask sequence to index form.
pub fn steps_of(masks: &[StepMask]) -> Vec<Step> {
    masks.iter().map(|&mask| step_of(mask)).collect()
}

/// Convert an index sequence to mask form.
pub fn masks_of(steps: &[Step]) -> Vec<StepMask> {
    steps.iter().map(|&step| mask_of(step)).collect()
}

/// Exchange two labels everywhere in a sequence.
///
/// Every occurrence of `a` becomes `b` and every occurrence of `b` becomes `a`.
/// Works for both representations, since a relabeling of digits is the same
/// permutation whether digits are written as indices or as masks.
#[inline]
pub fn relabel<T: Copy + PartialEq>(sequence: &mut [T], a: T, b: T) {
    for value in sequence.iter_mut() {
        if *value == a {
            *value = b;
        } else if *value == b {
            *value = a;
        }
    }
}

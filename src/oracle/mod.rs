// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Brute-force enumeration of cyclic Gray codes.
//!
//! A plain depth-first walk over the hypercube from 0, with no symmetry
//! reduction. It is only practical for four digits, where it serves as an
//! independent check of the census and of the assumption that every leading
//! step accounts for the same number of codes.

use crate::geometry::constants::{LEN, NDIGITS};
use crate::geometry::Step;

/// Call `visit` with the step sequence of every cyclic Gray code.
///
/// Codes are visited in lexicographic order of their steps.
pub fn for_each_code<F: FnMut(&[Step])>(mut visit: F) {
    let mut steps = Vec::with_capacity(LEN);
    let mut seen = vec![false; LEN];
    seen[0] = true;
    walk(0, &mut steps, &mut seen, &mut visit);
}

fn walk<F: FnMut(&[Step])>(value: usize, steps: &mut Vec<Step>, seen: &mut [bool], visit: &mut F) {
    if steps.len() == LEN - 1 {
        // The last step must return to 0.
        if value.is_power_of_two() {
            steps.push(value.trailing_zeros() as Step);
            visit(steps.as_slice());
            steps.pop();
        }
        return;
    }
    for step in 0..NDIGITS {
        let next = value ^ (1 << step);
        if seen[next] {
            continue;
        }
        seen[next] = true;
        steps.push(step as Step);
        walk(next, steps, seen, visit);
        steps.pop();
        seen[next] = false;
    }
}

/// Number of codes, by their first step.
pub fn count_by_leading_step() -> [u64; NDIGITS] {
    let mut counts = [0; NDIGITS];
    for_each_code(|steps| counts[steps[0] as usize] += 1);
    counts
}

/// Total number of cyclic Gray codes.
pub fn count() -> u128 {
    count_by_leading_step().iter().map(|&c| c as u128).sum()
}

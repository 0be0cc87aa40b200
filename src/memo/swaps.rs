// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Swap queues: every permutation of a label set, one transposition at a time.
//!
//! Applying the queue's swaps in order to a sequence (starting from the
//! identity labeling) visits each of the k! relabelings exactly once. The
//! orbit engine uses the full NDIGITS alphabet in index form; the canonical
//! test uses the digits a partition prefix leaves free, in mask form.
//!
//! # Construction
//!
//! With k labels, hold the last one out and recursively exhaust the first
//! k-1. Then swap the held-out label with its left neighbour, which brings it
//! into the recursive block and holds out a different label, and exhaust
//! again. After k such blocks every label has been held out once.
//!
//! ```text
//! labels [0, 1, 2]: (0,1) (2,1) (0,2) (1,0) (1,2)
//! ```

use crate::geometry::constants::factorial;

/// An ordered list of label transpositions covering every permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQueue<T> {
    swaps: Vec<(T, T)>,
}

impl<T: Copy> SwapQueue<T> {
    /// Build the queue for the given labels. Has `labels.len()! - 1` swaps.
    pub fn build(labels: &[T]) -> Self {
        let mut swaps = Vec::with_capacity(factorial(labels.len()) - 1);
        push_swaps(labels, &mut swaps);
        Self { swaps }
    }

    /// The swaps, excluding the implicit identity that comes first.
    pub fn swaps(&self) -> &[(T, T)] {
        &self.swaps
    }

    /// Number of relabelings visited, counting the identity.
    pub fn permutations(&self) -> usize {
        self.swaps.len() + 1
    }
}

fn push_swaps<T: Copy>(labels: &[T], queue: &mut Vec<(T, T)>) {
    let n = labels.len();
    match n {
        0 | 1 => return,
        2 => {
            queue.push((labels[0], labels[1]));
            return;
        }
        _ => {}
    }

    let mut block = labels[..n - 1].to_vec();
    for i in (1..n).rev() {
        push_swaps(&block, queue);
        queue.push((labels[i], labels[i - 1]));
        block[i - 1] = labels[i];
    }
    push_swaps(&block, queue);
}

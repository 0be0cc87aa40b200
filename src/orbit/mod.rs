// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orbit extrapolation.
//!
//! Every seed stands for the codes obtained from it by relabeling digits and
//! rotating. This module counts them without listing them:
//!
//! 1. Walk all NDIGITS! relabelings of the seed, one transposition at a time.
//! 2. Keep one sequence number per distinct relabeling up to rotation. A new
//!    relabeling is a duplicate when one of its rotations is already kept.
//! 3. Multiply the distinct count by the number of distinct rotations: LEN,
//!    or LEN/2 when the seed is invariant under a half turn.
//!
//! The distinct count divides NDIGITS!, which allows two shortcuts, tracked
//! against the ladder of halvings of NDIGITS! (3, 6, 12, 24 for four digits):
//!
//! - once the count passes the rung below NDIGITS!, it must be NDIGITS!;
//! - once the count sits on a rung and fewer relabelings remain than that
//!   rung, the count is taken as final.

use crate::codec::{encode_into, SequenceNumber};
use crate::errors::CensusError;
use crate::geometry::constants::{LEN, PERMUTATIONS};
use crate::geometry::{is_half_symmetric, relabel, Sequence, Step};
use crate::hashset::BigHashSet;
use crate::memo::MemoizedData;
use num_traits::Zero;
use std::collections::BTreeSet;

/// The halvings of NDIGITS!, smallest first, ending with NDIGITS! itself.
pub fn ladder() -> Vec<usize> {
    let halvings = PERMUTATIONS.trailing_zeros();
    (0..=halvings).rev().map(|i| PERMUTATIONS >> i).collect()
}

/// Reusable orbit counter; one per extrapolation worker.
pub struct OrbitCounter<'a> {
    memo: &'a MemoizedData,
    representatives: BigHashSet,
    ladder: Vec<usize>,
    scratch: Vec<Step>,
    original: SequenceNumber,
    rotation: SequenceNumber,
}

impl<'a> OrbitCounter<'a> {
    pub fn new(memo: &'a MemoizedData) -> Result<Self, CensusError> {
        Ok(Self {
            memo,
            representatives: BigHashSet::with_capacity(2 * PERMUTATIONS + 1)?,
            ladder: ladder(),
            scratch: Vec::with_capacity(LEN),
            original: SequenceNumber::zero(),
            rotation: SequenceNumber::zero(),
        })
    }

    /// Number of relabelings of `seed` that are distinct up to rotation.
    pub fn distinct_relabelings(&mut self, seed: &[Step]) -> Result<usize, CensusError> {
        let memo = self.memo;
        let swaps = memo.relabelings.swaps();
        self.scratch.clear();
        self.scratch.extend_from_slice(seed);
        self.representatives.clear();

        let mut rung = 0;
        for tried in 1..=PERMUTATIONS {
            // The identity comes first, then one transposition per relabeling.
            if tried > 1 {
                let (a, b) = swaps[tried - 2];
                relabel(&mut self.scratch, a, b);
            }
            if self.is_new_representative() {
                self.representatives.insert(&self.original)?;
            }

            let count = self.representatives.len();
            let target = self.ladder[rung];
            if count < target {
                continue;
            }
            if count > target {
                rung += 1;
                if self.ladder[rung] == PERMUTATIONS {
                    return Ok(PERMUTATIONS);
                }
            } else if target > PERMUTATIONS - tried {
                break;
            }
        }
        Ok(self.representatives.len())
    }

    /// Number of Gray codes in the seed's orbit.
    pub fn codes_for(&mut self, seed: &[Step]) -> Result<u128, CensusError> {
        let distinct = self.distinct_relabelings(seed)? as u128;
        Ok(distinct * rotations(seed) as u128)
    }

    /// Sum of orbit sizes over a list of seeds.
    pub fn count_all(&mut self, seeds: &[Sequence]) -> Result<u128, CensusError> {
        let mut total = 0u128;
        for seed in seeds {
            total += self.codes_for(seed)?;
        }
        Ok(total)
    }

    /// Encode the scratch sequence into `original` and test its rotations.
    fn is_new_representative(&mut self) -> bool {
        encode_into(&self.scratch, &mut self.original);
        self.rotation.clone_from(&self.original);
        for &leading in &self.scratch {
            if self.representatives.contains(&self.rotation) {
                return false;
            }
            self.memo.multiples.rotate(&mut self.rotation, leading);
            if self.rotation == self.original {
                break;
            }
        }
        true
    }
}

/// Distinct rotations of a seed.
pub fn rotations(seed: &[Step]) -> usize {
    if is_half_symmetric(seed) {
        LEN / 2
    } else {
        LEN
    }
}

/// Every member of the seed's orbit, listed explicitly.
///
/// Costs NDIGITS!·LEN sequences; meant for checking small digit counts.
pub fn expand(memo: &MemoizedData, seed: &[Step]) -> BTreeSet<Vec<Step>> {
    let mut members = BTreeSet::new();
    let mut relabeled = seed.to_vec();
    let mut add_rotations = |sequence: &[Step]| {
        let mut rotation = sequence.to_vec();
        for _ in 0..sequence.len() {
            members.insert(rotation.clone());
            rotation.rotate_left(1);
        }
    };
    add_rotations(&relabeled);
    for &(a, b) in memo.relabelings.swaps() {
        relabel(&mut relabeled, a, b);
        add_rotations(&relabeled);
    }
    members
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::step_of;

    fn reflected(memo: &MemoizedData) -> Vec<Step> {
        memo.lowest.iter().map(|&m| step_of(m)).collect()
    }

    #[test]
    fn test_ladder() {
        let ladder = ladder();
        assert_eq!(*ladder.last().unwrap(), PERMUTATIONS);
        assert_eq!(ladder[0] % 2, 1);
        for pair in ladder.windows(2) {
            assert_eq!(pair[0] * 2, pair[1]);
        }
    }

    #[test]
    #[cfg(digits_eq_4)]
    fn test_ladder_n4() {
        assert_eq!(ladder(), vec![3, 6, 12, 24]);
    }

    #[test]
    fn test_count_matches_expansion_for_reflected_code() {
        let memo = MemoizedData::new().unwrap();
        let seed = reflected(&memo);
        let mut counter = OrbitCounter::new(&memo).unwrap();
        let codes = counter.codes_for(&seed).unwrap();
        assert_eq!(codes, expand(&memo, &seed).len() as u128);
    }

    #[test]
    fn test_reflected_code_has_half_rotations() {
        let memo = MemoizedData::new().unwrap();
        assert_eq!(rotations(&reflected(&memo)), LEN / 2);
    }

    #[test]
    fn test_counter_is_reusable() {
        let memo = MemoizedData::new().unwrap();
        let seed = reflected(&memo);
        let mut counter = OrbitCounter::new(&memo).unwrap();
        let first = counter.codes_for(&seed).unwrap();
        let second = counter.codes_for(&seed).unwrap();
        assert_eq!(first, second);
        let fixed: Sequence = seed.clone().try_into().unwrap();
        let both = counter.count_all(&[fixed, fixed]).unwrap();
        assert_eq!(both, 2 * first);
    }

    #[test]
    fn test_expanded_members_are_gray_codes() {
        let memo = MemoizedData::new().unwrap();
        for member in expand(&memo, &reflected(&memo)) {
            assert!(crate::geometry::is_gray_code(&member));
        }
    }
}

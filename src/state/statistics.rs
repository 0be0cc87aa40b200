// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Each search worker owns one block of counters and hands it back with its
//! seeds. Blocks from different workers can be merged for a census total.

use std::fmt;
use std::ops::AddAssign;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Complete Gray codes reached by the search.
    Accepted,
    /// Accepted codes that passed the canonical-form test.
    Seeds,
    /// Accepted codes with a lower relabeled rotation.
    NonCanonical,
    /// Accepted codes whose wraparound matches a lower partition's prefix.
    WrapCovered,
}

/// Why the search abandoned a branch.
#[derive(EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Rejection {
    /// The walk returned to 0 before the last position.
    PrematureReturn,
    /// The walk reached a value it had already visited.
    Revisit,
    /// The branch can be relabeled into a lower partition's prefix.
    LowerPartition,
}

const COUNT: usize = Counters::COUNT + Rejection::COUNT;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Record one abandoned branch.
    #[inline]
    pub fn reject(&mut self, reason: Rejection) {
        self.stats[Counters::COUNT + reason as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Number of branches abandoned for the given reason.
    pub fn rejections(&self, reason: Rejection) -> u64 {
        self.stats[Counters::COUNT + reason as usize]
    }
}

impl AddAssign<&Statistics> for Statistics {
    fn add_assign(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counters = Counters::iter().map(|c| (<&str>::from(c), self.get(c)));
        let rejections = Rejection::iter().map(|r| (<&str>::from(r), self.rejections(r)));
        for (i, (name, value)) in counters.chain(rejections).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_independent() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Accepted);
        stats.increment_counter(Counters::Accepted);
        stats.increment_counter(Counters::Seeds);
        stats.reject(Rejection::Revisit);
        assert_eq!(stats.get(Counters::Accepted), 2);
        assert_eq!(stats.get(Counters::Seeds), 1);
        assert_eq!(stats.get(Counters::NonCanonical), 0);
        assert_eq!(stats.rejections(Rejection::Revisit), 1);
        assert_eq!(stats.rejections(Rejection::PrematureReturn), 0);
    }

    #[test]
    fn test_merge() {
        let mut total = Statistics::new();
        let mut one = Statistics::new();
        one.increment_counter(Counters::Seeds);
        one.reject(Rejection::LowerPartition);
        total += &one;
        total += &one;
        assert_eq!(total.get(Counters::Seeds), 2);
        assert_eq!(total.rejections(Rejection::LowerPartition), 2);
    }

    #[test]
    fn test_display() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::Seeds);
        let text = stats.to_string();
        assert!(text.starts_with("Accepted=0, Seeds=1"));
        assert!(text.ends_with("LowerPartition=0"));
    }
}

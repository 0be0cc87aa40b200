// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Seed search engine.
//!
//! This module enumerates, for one partition, every cyclic Gray code that
//! starts with the partition's prefix and is the canonical representative of
//! its class. Those codes are the partition's seeds.
//!
//! # Representation
//!
//! The candidate is a mixed-radix counter: an array of LEN step masks where
//! each position holds a single bit. Positions before the cursor describe a
//! valid partial walk; the cursor is the position being tested; positions
//! after it hold the lowest possible tail. Incrementing a position shifts its
//! bit left, and a position holding the top digit carries into the one
//! before it.
//!
//! Alongside the masks the engine keeps the walk itself (`values`) and which
//! values it has visited (`seen`), so that extending or retreating by one
//! position is O(1).
//!
//! # Execution
//!
//! The engine is an explicit state machine:
//!
//! 1. **Extend**: test the cursor position; advance on success.
//! 2. **Accept**: a full cycle has been built; test and record it.
//! 3. **Reject**: record why the branch was abandoned.
//! 4. **Increment**: move to the next candidate in counter order.
//! 5. **Done**: the counter has carried into the prefix.
//!
//! The search for one partition is independent of every other partition, so
//! the census runs each on its own thread with its own engine.

pub mod predicate;

pub use predicate::{LowerCheck, Partition, Window, LONG_PARTITION, PARTITIONS};

use crate::errors::CensusError;
use crate::geometry::constants::{LAST_DIGIT_STEP, LEN};
use crate::geometry::{step_of, Sequence, Step, StepMask};
use crate::memo::MemoizedData;
use crate::state::{Counters, Rejection, Statistics};
use crate::symmetry::CanonicalTest;
use tracing::{debug, info};

/// Log a progress line every this many seeds.
const PROGRESS_INTERVAL: usize = 1 << 19;

/// Smallest growth step of the seed list.
const MIN_SEED_GROWTH: usize = 256;

/// Positions at the end of a cycle that are forced by the rest of it.
///
/// Once a cycle is accepted, no alternative for its last three steps can be
/// another cycle, so the engine resumes incrementing three positions back.
const FORCED_TAIL: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Extend,
    Accept,
    Reject(Rejection),
    Increment,
    Done,
}

/// The result of one partition's search.
#[derive(Debug, Clone)]
pub struct Harvest {
    /// Canonical codes, in index form, in the order the search found them.
    pub seeds: Vec<Sequence>,
    pub statistics: Statistics,
}

/// Backtracking search over one partition.
pub struct SeedSearch<'a> {
    memo: &'a MemoizedData,
    partition: &'a Partition,
    canonical: CanonicalTest<'a>,

    /// LEN candidate masks, followed by a copy of the first `reach` prefix
    /// masks so that the wraparound can be tested as a contiguous window.
    steps: Vec<StepMask>,

    /// `values[i + 1]` is the walk's value after step `i`; `values[0]` is 0.
    values: Vec<usize>,

    /// Values visited by the walk before the cursor.
    seen: Vec<bool>,

    cursor: usize,

    /// Last prefix position; once it changes, the partition is exhausted.
    limit: usize,
    limit_mask: StepMask,

    seeds: Vec<Sequence>,
    statistics: Statistics,
}

impl<'a> SeedSearch<'a> {
    /// Position the counter at the lowest candidate with the partition's prefix.
    pub fn new(partition: &'a Partition, memo: &'a MemoizedData) -> Self {
        let prefix = partition.prefix_masks();
        let fixed = prefix.len();
        let reach = partition.reach();

        let mut steps = Vec::with_capacity(LEN + reach);
        steps.extend_from_slice(&prefix);
        steps.extend_from_slice(&memo.lowest[..LEN - fixed]);
        steps.extend_from_slice(&prefix[..reach]);

        let mut values = vec![0; LEN + 1];
        let mut seen = vec![false; LEN];
        for position in 0..fixed {
            let value = values[position] ^ steps[position] as usize;
            values[position + 1] = value;
            seen[value] = true;
        }

        Self {
            memo,
            partition,
            canonical: CanonicalTest::new(partition, memo),
            steps,
            values,
            seen,
            cursor: fixed,
            limit: fixed - 1,
            limit_mask: prefix[fixed - 1],
            seeds: Vec::new(),
            statistics: Statistics::new(),
        }
    }

    /// Run the search to exhaustion.
    ///
    /// Fails only if the seed list cannot grow.
    pub fn run(mut self) -> Result<Harvest, CensusError> {
        let name = self.partition.name();
        info!("[SeedSearch {}] starting", name);

        let mut state = State::Extend;
        loop {
            state = match state {
                State::Extend => self.extend(),
                State::Accept => self.accept()?,
                State::Reject(reason) => {
                    self.statistics.reject(reason);
                    State::Increment
                }
                State::Increment => self.increment(),
                State::Done => break,
            };
        }

        info!("[SeedSearch {}] {} seeds", name, self.seeds.len());
        debug!("[SeedSearch {}] {}", name, self.statistics);
        Ok(Harvest {
            seeds: self.seeds,
            statistics: self.statistics,
        })
    }

    /// Test the cursor position and, if it holds, move past it.
    fn extend(&mut self) -> State {
        let cursor = self.cursor;
        if let Some(lower) = self.partition.lower {
            if (lower.covered)(&self.steps[cursor - lower.reach..=cursor]) {
                return State::Reject(Rejection::LowerPartition);
            }
        }

        let value = self.values[cursor] ^ self.steps[cursor] as usize;
        self.values[cursor + 1] = value;
        if value == 0 {
            return if cursor == LEN - 1 {
                State::Accept
            } else {
                State::Reject(Rejection::PrematureReturn)
            };
        }
        if self.seen[value] {
            return State::Reject(Rejection::Revisit);
        }

        self.seen[value] = true;
        self.cursor += 1;
        State::Extend
    }

    /// Handle a complete cycle, then retreat over its forced tail.
    fn accept(&mut self) -> Result<State, CensusError> {
        self.statistics.increment_counter(Counters::Accepted);

        if self.wraps_into_lower_partition() {
            self.statistics.increment_counter(Counters::WrapCovered);
        } else if !self.canonical.is_canonical(&self.steps[..LEN]) {
            self.statistics.increment_counter(Counters::NonCanonical);
        } else {
            self.record_seed()?;
        }

        self.cursor -= FORCED_TAIL;
        for &value in &self.values[self.cursor + 1..=self.cursor + FORCED_TAIL] {
            self.seen[value] = false;
        }
        Ok(State::Increment)
    }

    /// Whether a window running off the end into the prefix is covered.
    fn wraps_into_lower_partition(&self) -> bool {
        let Some(lower) = self.partition.lower else {
            return false;
        };
        (LEN - 1..LEN + lower.reach)
            .any(|end| (lower.covered)(&self.steps[end - lower.reach..=end]))
    }

    fn record_seed(&mut self) -> Result<(), CensusError> {
        if self.seeds.len() == self.seeds.capacity() {
            let growth = self.seeds.capacity().max(MIN_SEED_GROWTH);
            self.seeds
                .try_reserve_exact(growth)
                .map_err(CensusError::allocation("seed list"))?;
        }

        let mut seed: Sequence = [0; LEN];
        for (slot, &mask) in seed.iter_mut().zip(&self.steps[..LEN]) {
            *slot = step_of(mask);
        }
        self.seeds.push(seed);
        self.statistics.increment_counter(Counters::Seeds);

        if self.seeds.len() % PROGRESS_INTERVAL == 0 {
            debug!(
                "[SeedSearch {}] {} seeds, latest {}",
                self.partition.name(),
                self.seeds.len(),
                digits(&seed)
            );
        }
        Ok(())
    }

    /// Advance the counter to the next candidate.
    ///
    /// Carries out of positions holding the top digit, skips any value equal
    /// to its predecessor (an immediate return), and refills the tail with
    /// the lowest sequence.
    fn increment(&mut self) -> State {
        loop {
            while self.steps[self.cursor] & LAST_DIGIT_STEP != 0 {
                self.cursor -= 1;
                self.seen[self.values[self.cursor + 1]] = false;
            }
            self.steps[self.cursor] <<= 1;
            if self.steps[self.cursor] != self.steps[self.cursor - 1] {
                break;
            }
        }

        let tail = LEN - 1 - self.cursor;
        self.steps[self.cursor + 1..LEN].copy_from_slice(&self.memo.lowest[..tail]);

        if self.steps[self.limit] != self.limit_mask {
            State::Done
        } else {
            State::Extend
        }
    }
}

/// Write a sequence as a string of digits, e.g. `0102010301020103`.
pub fn digits(steps: &[Step]) -> String {
    steps.iter().map(|step| step.to_string()).collect()
}

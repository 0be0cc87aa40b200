// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Census orchestration.
//!
//! Stage A runs one seed search per partition, each on its own thread. The
//! pruned partitions finish quickly; the coordinator joins them in reverse
//! order and extrapolates their seeds itself while the long partition is
//! still searching. Stage B then splits the long partition's seeds evenly
//! across a pool of extrapolation workers.
//!
//! Workers share only the immutable [`MemoizedData`]. Each result moves to
//! the coordinator when its thread is joined.

#[cfg(feature = "runtime")]
pub mod stopwatch;

use crate::engine::{Harvest, SeedSearch, LONG_PARTITION, PARTITIONS};
use crate::errors::CensusError;
use crate::geometry::constants::{LEN, PERMUTATIONS};
use crate::geometry::{Sequence, Step};
use crate::memo::MemoizedData;
use crate::orbit::OrbitCounter;
use crate::state::Statistics;
#[cfg(feature = "runtime")]
use stopwatch::Stopwatch;
use std::thread;
use tracing::info;

/// Default size of the stage B pool.
pub const DEFAULT_EXTRAPOLATION_THREADS: usize = 4;

/// Tunables for a census run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusConfig {
    /// Workers sharing the long partition's seeds in stage B.
    pub extrapolation_threads: usize,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            extrapolation_threads: DEFAULT_EXTRAPOLATION_THREADS,
        }
    }
}

/// Outcome for one partition.
#[derive(Debug, Clone)]
pub struct PartitionReport {
    /// The prefix written as digits.
    pub name: String,
    pub prefix: &'static [Step],
    pub seeds: usize,
    /// Gray codes in the orbits of this partition's seeds.
    pub codes: u128,
    pub statistics: Statistics,
}

/// Outcome of a whole census.
#[derive(Debug, Clone)]
pub struct CensusReport {
    /// In partition order.
    pub partitions: Vec<PartitionReport>,
    pub seeds: usize,
    pub codes: u128,
}

impl CensusReport {
    fn new(partitions: Vec<PartitionReport>) -> Self {
        let seeds = partitions.iter().map(|p| p.seeds).sum();
        let codes = partitions.iter().map(|p| p.codes).sum();
        Self {
            partitions,
            seeds,
            codes,
        }
    }

    /// Analytic upper bound on the code count, `(seeds − 3/4)·NDIGITS!·LEN`.
    ///
    /// An orbit holds at most NDIGITS!·LEN codes; the reflected code's
    /// orbit holds a quarter of that.
    pub fn upper_bound(&self) -> u128 {
        let quarters = (4 * self.seeds as u128).saturating_sub(3);
        quarters * PERMUTATIONS as u128 * LEN as u128 / 4
    }

    /// Counters from every partition, merged; logged as the run's total.
    pub fn statistics(&self) -> Statistics {
        let mut total = Statistics::new();
        for partition in &self.partitions {
            total += &partition.statistics;
        }
        total
    }
}

/// Run both stages and report.
pub fn run(memo: &MemoizedData, config: &CensusConfig) -> Result<CensusReport, CensusError> {
    let mut reports: Vec<Option<PartitionReport>> = vec![None; PARTITIONS.len()];
    #[cfg(feature = "runtime")]
    let stage_a = Stopwatch::start();

    let long = thread::scope(|scope| -> Result<Harvest, CensusError> {
        let mut searches: Vec<_> = PARTITIONS
            .iter()
            .map(|partition| {
                Some(scope.spawn(move || SeedSearch::new(partition, memo).run()))
            })
            .collect();

        let mut counter = OrbitCounter::new(memo)?;
        for index in (0..PARTITIONS.len()).rev() {
            if index == LONG_PARTITION {
                continue;
            }
            let Some(search) = searches[index].take() else {
                continue;
            };
            let harvest = join_search(index, search.join())?;
            let codes = counter.count_all(&harvest.seeds)?;
            info!(
                "[Census] partition {}: {} seeds, {} codes",
                PARTITIONS[index].name(),
                harvest.seeds.len(),
                codes
            );
            reports[index] = Some(report(index, &harvest, codes));
        }

        match searches[LONG_PARTITION].take() {
            Some(search) => join_search(LONG_PARTITION, search.join()),
            None => Err(search_panicked(LONG_PARTITION)),
        }
    })?;

    #[cfg(feature = "runtime")]
    info!("[Census] stage A took {}", stage_a.elapsed());
    #[cfg(feature = "runtime")]
    let stage_b = Stopwatch::start();

    info!(
        "[Census] partition {}: {} seeds, extrapolating on {} threads",
        PARTITIONS[LONG_PARTITION].name(),
        long.seeds.len(),
        config.extrapolation_threads.max(1)
    );
    let codes = extrapolate_in_parallel(memo, &long.seeds, config.extrapolation_threads)?;
    reports[LONG_PARTITION] = Some(report(LONG_PARTITION, &long, codes));

    #[cfg(feature = "runtime")]
    info!("[Census] stage B took {}", stage_b.elapsed());

    Ok(CensusReport::new(reports.into_iter().flatten().collect()))
}

/// Count the orbits of `seeds` on `workers` threads.
///
/// Seeds are split into equal shares; the last worker also takes the
/// remainder.
pub fn extrapolate_in_parallel(
    memo: &MemoizedData,
    seeds: &[Sequence],
    workers: usize,
) -> Result<u128, CensusError> {
    let workers = workers.max(1);
    let share = seeds.len() / workers;

    thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let start = worker * share;
                let end = if worker + 1 == workers {
                    seeds.len()
                } else {
                    start + share
                };
                let chunk = &seeds[start..end];
                scope.spawn(move || -> Result<u128, CensusError> {
                    let codes = OrbitCounter::new(memo)?.count_all(chunk)?;
                    info!(
                        "[Extrapolate {}] {} codes from {} seeds",
                        worker,
                        codes,
                        chunk.len()
                    );
                    Ok(codes)
                })
            })
            .collect();

        let mut total = 0u128;
        for (worker, handle) in handles.into_iter().enumerate() {
            total += handle
                .join()
                .map_err(|_| worker_panicked(format!("extrapolation {}", worker)))??;
        }
        Ok(total)
    })
}

fn join_search(
    index: usize,
    joined: thread::Result<Result<Harvest, CensusError>>,
) -> Result<Harvest, CensusError> {
    joined.map_err(|_| search_panicked(index))?
}

fn search_panicked(index: usize) -> CensusError {
    worker_panicked(format!("partition {}", PARTITIONS[index].name()))
}

fn worker_panicked(worker: String) -> CensusError {
    CensusError::WorkerPanicked { worker }
}

fn report(index: usize, harvest: &Harvest, codes: u128) -> PartitionReport {
    PartitionReport {
        name: PARTITIONS[index].name(),
        prefix: PARTITIONS[index].prefix,
        seeds: harvest.seeds.len(),
        codes,
        statistics: harvest.statistics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Counters, Rejection};

    #[test]
    fn test_default_config() {
        assert_eq!(CensusConfig::default().extrapolation_threads, 4);
    }

    #[test]
    fn test_upper_bound() {
        let report = CensusReport::new(vec![PartitionReport {
            name: "01020".to_string(),
            prefix: &[0, 1, 0, 2, 0],
            seeds: 1,
            codes: 0,
            statistics: Statistics::new(),
        }]);
        assert_eq!(report.upper_bound(), (PERMUTATIONS * LEN / 4) as u128);
    }

    #[test]
    fn test_statistics_merge_every_partition() {
        let partition = |name: &str, seeds: usize| {
            let mut statistics = Statistics::new();
            for _ in 0..seeds {
                statistics.increment_counter(Counters::Accepted);
                statistics.increment_counter(Counters::Seeds);
            }
            statistics.reject(Rejection::Revisit);
            PartitionReport {
                name: name.to_string(),
                prefix: &[],
                seeds,
                codes: 0,
                statistics,
            }
        };
        let report = CensusReport::new(vec![partition("0102", 3), partition("0120", 2)]);
        let total = report.statistics();
        assert_eq!(total.get(Counters::Seeds), 5);
        assert_eq!(total.get(Counters::Accepted), 5);
        assert_eq!(total.rejections(Rejection::Revisit), 2);
        assert_eq!(total.get(Counters::Seeds), report.seeds as u64);
    }

    #[test]
    fn test_empty_report() {
        let report = CensusReport::new(Vec::new());
        assert_eq!(report.seeds, 0);
        assert_eq!(report.codes, 0);
        assert_eq!(report.upper_bound(), 0);
        assert_eq!(report.statistics(), Statistics::new());
    }

    #[test]
    #[cfg(digits_eq_4)]
    fn test_parallel_extrapolation_matches_sequential() {
        let memo = MemoizedData::new().unwrap();
        let harvest = SeedSearch::new(&PARTITIONS[LONG_PARTITION], &memo)
            .run()
            .unwrap();
        let sequential = OrbitCounter::new(&memo)
            .unwrap()
            .count_all(&harvest.seeds)
            .unwrap();
        for workers in [1, 3, 4, 20] {
            let parallel = extrapolate_in_parallel(&memo, &harvest.seeds, workers).unwrap();
            assert_eq!(parallel, sequential, "{} workers", workers);
        }
    }

    #[test]
    #[cfg(digits_eq_4)]
    fn test_census_n4() {
        let memo = MemoizedData::new().unwrap();
        let report = run(&memo, &CensusConfig::default()).unwrap();
        assert_eq!(report.codes, 2688);
        assert_eq!(report.seeds, 11);
        assert_eq!(report.upper_bound(), 3936);
        let seeds: Vec<usize> = report.partitions.iter().map(|p| p.seeds).collect();
        assert_eq!(seeds, vec![8, 3, 0, 0, 0]);
        assert_eq!(report.statistics().get(Counters::Seeds), 11);
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

#![cfg(digits_eq_4)]

/* Four digits is small enough that the brute-force oracle lists every code,
  so each stage of the census can be checked against it directly.
*/
mod common;

use std::collections::BTreeSet;

use gray_census::census::{self, CensusConfig};
use gray_census::geometry::{is_gray_code, Step};
use gray_census::orbit::{expand, OrbitCounter};
use gray_census::state::{Counters, Rejection};
use gray_census::symmetry::CanonicalTest;
use gray_census::{oracle, MemoizedData, PARTITIONS};

#[test]
fn test_census_total() {
    let memo = MemoizedData::new().unwrap();
    let report = census::run(&memo, &CensusConfig::default()).unwrap();

    assert_eq!(report.codes, 2688);
    assert_eq!(report.codes, oracle::count());
    assert_eq!(report.seeds, 11);
    assert_eq!(report.upper_bound(), 3936);
    assert!(report.codes <= report.upper_bound());

    let names: Vec<&str> = report.partitions.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["01020", "01021", "01023", "0120", "0123"]);
    let seeds: Vec<usize> = report.partitions.iter().map(|p| p.seeds).collect();
    assert_eq!(seeds, vec![8, 3, 0, 0, 0]);
    let codes: Vec<u128> = report.partitions.iter().map(|p| p.codes).collect();
    assert_eq!(codes, vec![2208, 480, 0, 0, 0]);
}

#[test]
fn test_single_extrapolation_thread() {
    let memo = MemoizedData::new().unwrap();
    let config = CensusConfig {
        extrapolation_threads: 1,
    };
    assert_eq!(census::run(&memo, &config).unwrap().codes, 2688);
}

#[test]
fn test_seeds_are_canonical_gray_codes() {
    let memo = MemoizedData::new().unwrap();
    for (index, seed) in common::all_seeds(&memo) {
        assert!(is_gray_code(&seed));
        assert!(seed.starts_with(PARTITIONS[index].prefix));
        let mut test = CanonicalTest::new(&PARTITIONS[index], &memo);
        assert!(test.is_canonical(&common::masks(&seed)));
    }
}

#[test]
fn test_orbits_partition_all_codes() {
    let memo = MemoizedData::new().unwrap();
    let mut counter = OrbitCounter::new(&memo).unwrap();
    let mut covered: BTreeSet<Vec<Step>> = BTreeSet::new();

    for (_, seed) in common::all_seeds(&memo) {
        let orbit = expand(&memo, &seed);
        assert_eq!(counter.codes_for(&seed).unwrap(), orbit.len() as u128);
        assert!(covered.is_disjoint(&orbit), "seed orbits overlap");
        covered.extend(orbit);
    }

    let mut codes = BTreeSet::new();
    oracle::for_each_code(|steps| {
        codes.insert(steps.to_vec());
    });
    assert_eq!(covered, codes);
}

#[test]
fn test_leading_step_conjecture() {
    // Every first step accounts for the same share of codes.
    let counts = oracle::count_by_leading_step();
    assert!(counts.iter().all(|&c| c == counts[0]));
    assert_eq!(counts[0] * 4, 2688);
}

#[test]
fn test_pruned_partitions_reject_branches() {
    let memo = MemoizedData::new().unwrap();
    let harvests = common::harvest_all(&memo);
    for harvest in &harvests[1..] {
        assert!(harvest.statistics.rejections(Rejection::LowerPartition) > 0);
    }
    let total: u64 = harvests.iter().map(|h| h.statistics.get(Counters::Seeds)).sum();
    assert_eq!(total, 11);
}

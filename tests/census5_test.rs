// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

#![cfg(digits_eq_5)]

/* The five digit census takes a few minutes even in release mode, so the
  full run is ignored by default:

    cargo test --release --features digits_5 -- --ignored
*/
use gray_census::census::{self, CensusConfig};
use gray_census::geometry::is_gray_code;
use gray_census::{MemoizedData, OrbitCounter, SeedSearch, PARTITIONS};

#[test]
fn test_smallest_partitions() {
    // 0120 and 0123 finish first; each holds a handful of seeds.
    let memo = MemoizedData::new().unwrap();
    let mut counter = OrbitCounter::new(&memo).unwrap();
    for (index, seeds, codes) in [(3, 3, 5280), (4, 1, 960)] {
        let partition = &PARTITIONS[index];
        let harvest = SeedSearch::new(partition, &memo).run().unwrap();
        assert_eq!(harvest.seeds.len(), seeds, "{}", partition.name());
        for seed in &harvest.seeds {
            assert!(is_gray_code(seed));
            assert!(seed.starts_with(partition.prefix));
        }
        assert_eq!(counter.count_all(&harvest.seeds).unwrap(), codes);
    }
}

#[test]
#[ignore]
fn test_census_total() {
    let memo = MemoizedData::new().unwrap();
    let report = census::run(&memo, &CensusConfig::default()).unwrap();

    let seeds: Vec<usize> = report.partitions.iter().map(|p| p.seeds).collect();
    assert_eq!(seeds, vec![425_703, 41_786, 5_544, 3, 1]);
    assert_eq!(report.seeds, 473_037);
    assert_eq!(report.partitions[1].codes, 159_760_320);
    assert_eq!(report.partitions[2].codes, 20_941_920);
    assert_eq!(report.upper_bound(), 1_816_459_200);
    assert_eq!(report.codes, 1_813_091_520);
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use gray_census::geometry::step::masks_of;
use gray_census::geometry::{Sequence, StepMask};
use gray_census::{Harvest, MemoizedData, SeedSearch, PARTITIONS};

/// Run every partition's search sequentially, in partition order.
pub fn harvest_all(memo: &MemoizedData) -> Vec<Harvest> {
    PARTITIONS
        .iter()
        .map(|partition| {
            SeedSearch::new(partition, memo)
                .run()
                .unwrap_or_else(|e| panic!("search {} failed: {}", partition.name(), e))
        })
        .collect()
}

/// Every seed of every partition, paired with its partition index.
pub fn all_seeds(memo: &MemoizedData) -> Vec<(usize, Sequence)> {
    harvest_all(memo)
        .into_iter()
        .enumerate()
        .flat_map(|(index, harvest)| harvest.seeds.into_iter().map(move |seed| (index, seed)))
        .collect()
}

/// The sequence in mask form.
pub fn masks(seed: &Sequence) -> Vec<StepMask> {
    masks_of(seed)
}

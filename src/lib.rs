// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Census of cyclic n-bit Gray codes.
//!
//! Counts the cyclic sequences that visit every value in `0..2^n` exactly
//! once, consecutive values (and the last and first) differing in one bit.
//! The digit count n is fixed at compile time by a cargo feature.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Built once on the coordinating thread and borrowed by every worker:
//! - The lowest candidate sequence, which refills the search tail
//! - Rotation constants for sequence numbers
//! - Swap queues enumerating digit relabelings
//!
//! ## Tier 2: Worker Data (Mutable)
//!
//! Owned by one thread for its lifetime, and handed over on join:
//! - The search counter, its walk, and the visited-value table
//! - The seed list and statistics of one partition
//! - The orbit hash set of one extrapolation worker
//!
//! # Census Algorithm
//!
//! 1. **Seed search**: five partitions, one per fixed prefix, each find the
//!    canonical representatives (seeds) of the classes of codes under digit
//!    relabeling and rotation.
//! 2. **Orbit extrapolation**: each seed's class size is counted from its
//!    relabelings, without listing the codes.
//! 3. **Reduction**: class sizes are summed into the census total.
//!
//! # Example
//!
//! ```no_run
//! use gray_census::census::{self, CensusConfig};
//! use gray_census::memo::MemoizedData;
//!
//! let memo = MemoizedData::new()?;
//! let report = census::run(&memo, &CensusConfig::default())?;
//! println!("{} codes from {} seeds", report.codes, report.seeds);
//! # Ok::<(), gray_census::CensusError>(())
//! ```

pub mod census;
pub mod codec;
pub mod engine;
pub mod errors;
pub mod geometry;
pub mod hashset;
pub mod memo;
pub mod oracle;
pub mod orbit;
pub mod state;
pub mod symmetry;

// Re-export commonly used types
pub use census::{CensusConfig, CensusReport, PartitionReport};
pub use engine::{Harvest, Partition, SeedSearch, PARTITIONS};
pub use errors::CensusError;
pub use memo::MemoizedData;
pub use orbit::OrbitCounter;

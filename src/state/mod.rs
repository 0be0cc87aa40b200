// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-worker mutable state that outlives the search loop.

pub mod statistics;

pub use statistics::{Counters, Rejection, Statistics};

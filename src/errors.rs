// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the census.
//!
//! Every failure here is fatal to a run: there are no retries, and no partial
//! results are reported once one of these has been raised.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can stop a census.
#[derive(Debug, Error)]
pub enum CensusError {
    /// The digit count is too small for the fixed partition prefixes.
    #[error("{digits} digits is below the supported minimum of {minimum}")]
    TooFewDigits { digits: usize, minimum: usize },

    /// A fixed-width quantity derived from the digit count would overflow.
    #[error("{quantity} overflows with {digits} digits")]
    Overflow {
        quantity: &'static str,
        digits: usize,
    },

    /// Growing a seed list or building a table could not allocate.
    #[error("could not allocate {what}: {source}")]
    Allocation {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    /// Open addressing visited every slot without finding a free one.
    #[error("hash set of capacity {capacity} has no free slot")]
    TableFull { capacity: usize },

    /// A worker thread panicked before handing back its result.
    #[error("{worker} worker panicked")]
    WorkerPanicked { worker: String },
}

impl CensusError {
    pub(crate) fn allocation(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| CensusError::Allocation { what, source }
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Basic types for Gray code sequences.
//!
//! This module contains the representations shared by every stage:
//! - Step / StepMask: which bit is toggled, as an index or as a mask
//! - Sequence: a full cycle of LEN steps
//! - Constants derived from the compile-time digit count

pub mod constants;
pub mod sequence;
pub mod step;

// Re-export for convenience
pub use constants::*;
pub use sequence::{is_gray_code, is_half_symmetric, Sequence};
pub use step::{mask_of, relabel, step_of, Step, StepMask};

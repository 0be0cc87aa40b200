// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry checking for Gray code sequences.
//!
//! Gray codes related by a relabeling of digits and a rotation are counted
//! together, from one representative (the seed). This module decides whether
//! a sequence found by the search is that representative.
//!
//! ## Module Structure
//!
//! - `canonical`: Canonical-form test under relabeling × rotation
//! - `mod`: Public API and re-exports

pub mod canonical;

pub use canonical::{is_lower, CanonicalTest};

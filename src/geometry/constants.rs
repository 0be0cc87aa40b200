// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for n-bit Gray codes.
//!
//! This module defines NDIGITS (number of bits) and all derived constants.
//! NDIGITS can be configured at compile time via cargo features.
//!
//! # Supported NDIGITS values
//!
//! - 4: 2688 Gray codes, checkable by brute force - **default**
//! - 5: 1813091520 Gray codes (a few minutes of search)
//! - 6: feasible only with a large machine and patience
//! - 7: builds and validates, but the search will not finish
//!
//! # Example
//!
//! ```bash
//! # Default: NDIGITS=4
//! cargo build
//!
//! # Build for NDIGITS=5
//! cargo build --release --features digits_5
//! ```

use crate::errors::CensusError;

/// Number of binary digits in each code word.
///
/// This is configurable at compile time via cargo features:
/// - `digits_4` → NDIGITS=4 (explicit)
/// - `digits_5` → NDIGITS=5
/// - `digits_6` → NDIGITS=6
/// - `digits_7` → NDIGITS=7
/// - (default) → NDIGITS=4 (when no feature specified)
#[cfg(not(any(
    feature = "digits_4",
    feature = "digits_5",
    feature = "digits_6",
    feature = "digits_7"
)))]
pub const NDIGITS: usize = 4;

#[cfg(feature = "digits_4")]
pub const NDIGITS: usize = 4;

#[cfg(feature = "digits_5")]
pub const NDIGITS: usize = 5;

#[cfg(feature = "digits_6")]
pub const NDIGITS: usize = 6;

#[cfg(feature = "digits_7")]
pub const NDIGITS: usize = 7;

/// Smallest digit count the partition scheme supports.
///
/// The fixed prefixes of the search partitions use digits 0..=3.
pub const MIN_DIGITS: usize = 4;

/// Length of a step sequence, and number of code words (2^NDIGITS).
pub const LEN: usize = 1 << NDIGITS;

/// The step mask that toggles the highest-order bit.
///
/// This is the largest value any position of a mask sequence can hold, so
/// the mixed-radix increment carries past it.
pub const LAST_DIGIT_STEP: u16 = 1 << (NDIGITS - 1);

/// Width in bits of the StepMask type.
const STEP_MASK_BITS: usize = u16::BITS as usize;

/// Compute factorial at compile time.
pub(crate) const fn factorial(n: usize) -> usize {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Number of digit relabelings (NDIGITS!).
///
/// This is both the length of the full swap queue (plus the identity) and the
/// upper bound on the number of distinct relabelings in one orbit.
pub const PERMUTATIONS: usize = factorial(NDIGITS);

const _: () = assert!(NDIGITS >= MIN_DIGITS, "NDIGITS must be at least 4");

/// Check that a digit count can be run by this engine.
///
/// Rejects digit counts that are too small for the partition prefixes, and
/// those for which the sequence length, the permutation count, or a single
/// step mask would overflow the fixed-width integers used for them.
pub fn validate_digits(digits: usize) -> Result<(), CensusError> {
    if digits < MIN_DIGITS {
        return Err(CensusError::TooFewDigits {
            digits,
            minimum: MIN_DIGITS,
        });
    }
    if digits > STEP_MASK_BITS {
        return Err(CensusError::Overflow {
            quantity: "step mask",
            digits,
        });
    }
    if 1usize.checked_shl(digits as u32).is_none() {
        return Err(CensusError::Overflow {
            quantity: "sequence length",
            digits,
        });
    }
    if (2..=digits).try_fold(1usize, |acc, k| acc.checked_mul(k)).is_none() {
        return Err(CensusError::Overflow {
            quantity: "permutation count",
            digits,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(4), 24);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(6), 720);
        assert_eq!(factorial(7), 5040);
    }

    #[test]
    fn test_len() {
        assert_eq!(LEN, 1 << NDIGITS);
        match NDIGITS {
            4 => assert_eq!(LEN, 16),
            5 => assert_eq!(LEN, 32),
            6 => assert_eq!(LEN, 64),
            7 => assert_eq!(LEN, 128),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_last_digit_step() {
        assert_eq!(LAST_DIGIT_STEP as usize, LEN / 2);
        assert_eq!(LAST_DIGIT_STEP.trailing_zeros() as usize, NDIGITS - 1);
    }

    #[test]
    fn test_configured_digits_are_valid() {
        assert!(validate_digits(NDIGITS).is_ok());
    }

    #[test]
    fn test_too_few_digits() {
        for digits in 0..MIN_DIGITS {
            assert!(matches!(
                validate_digits(digits),
                Err(CensusError::TooFewDigits { minimum: 4, .. })
            ));
        }
    }

    #[test]
    fn test_mask_overflow() {
        assert!(matches!(
            validate_digits(17),
            Err(CensusError::Overflow {
                quantity: "step mask",
                digits: 17
            })
        ));
        assert!(validate_digits(16).is_ok());
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on NDIGITS feature selection.
//!
//! This enables cleaner conditional compilation in tests and code:
//! - `#[cfg(digits_eq_4)]` for the default, brute-force-checkable case
//! - `#[cfg(digits_min_5)]` instead of `#[cfg(any(feature = "digits_5", ...))]`

fn main() {
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(digits_eq_4)");
    println!("cargo:rustc-check-cfg=cfg(digits_eq_5)");
    println!("cargo:rustc-check-cfg=cfg(digits_min_5)");
    println!("cargo:rustc-check-cfg=cfg(digits_min_6)");

    // NDIGITS = 4 (default or explicit digits_4 feature)
    #[cfg(any(
        feature = "digits_4",
        not(any(feature = "digits_5", feature = "digits_6", feature = "digits_7"))
    ))]
    println!("cargo:rustc-cfg=digits_eq_4");

    #[cfg(feature = "digits_5")]
    println!("cargo:rustc-cfg=digits_eq_5");

    // NDIGITS >= 5
    #[cfg(any(feature = "digits_5", feature = "digits_6", feature = "digits_7"))]
    println!("cargo:rustc-cfg=digits_min_5");

    // NDIGITS >= 6
    #[cfg(any(feature = "digits_6", feature = "digits_7"))]
    println!("cargo:rustc-cfg=digits_min_6");
}

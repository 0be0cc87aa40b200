// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Count the cyclic Gray codes for the compiled-in digit count.
//!
//! Progress goes to stderr through `tracing`. `RUST_LOG` replaces the default
//! `info` filter (`RUST_LOG=debug` adds seed samples and statistics,
//! `RUST_LOG=warn` keeps only the summary). The summary goes to stdout.

use anyhow::Context;
#[cfg(feature = "runtime")]
use gray_census::census::stopwatch::Stopwatch;
use gray_census::census::{self, CensusConfig};
use gray_census::geometry::constants::NDIGITS;
use gray_census::memo::MemoizedData;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

/// Filter from `RUST_LOG` directives, or `info` when they are absent or
/// malformed.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    #[cfg(feature = "runtime")]
    let start = Stopwatch::start();

    let memo = MemoizedData::new().context("building lookup tables")?;
    let config = CensusConfig::default();
    info!(
        "[graycount] {} digits, {} extrapolation threads",
        NDIGITS, config.extrapolation_threads
    );

    let report = census::run(&memo, &config)
        .with_context(|| format!("census of {}-digit Gray codes", NDIGITS))?;

    #[cfg(feature = "runtime")]
    info!("[graycount] finished in {}", start.elapsed());

    for partition in &report.partitions {
        info!("[graycount] {}: {}", partition.name, partition.statistics);
    }
    info!("[graycount] total: {}", report.statistics());
    println!("Seeds found: {}", report.seeds);
    println!("Upper bound: {}", report.upper_bound());
    println!("Gray codes with {} digits: {}", NDIGITS, report.codes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_default_filter_is_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("")).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_rust_log_lowers_the_level() {
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("gray_census=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn test_rust_log_raises_the_level() {
        assert_eq!(
            log_filter(Some("warn")).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }

    #[test]
    fn test_malformed_rust_log_falls_back() {
        assert_eq!(
            log_filter(Some("gray_census=loud")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Wall-clock and CPU timing for the `runtime` feature.
//!
//! CPU time is summed over every thread of the process, so with parallel
//! stages it usually exceeds the wall-clock time.

use std::fmt;
use std::time::{Duration, Instant};

/// User plus system CPU time this process has used so far.
///
/// `None` where the platform offers no `getrusage`.
pub fn cpu_time() -> Option<Duration> {
    #[cfg(unix)]
    {
        // SAFETY: rusage is plain data, and getrusage fills it in on success.
        let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
        let status = unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) };
        if status != 0 {
            return None;
        }
        Some(duration(usage.ru_utime) + duration(usage.ru_stime))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

#[cfg(unix)]
fn duration(time: libc::timeval) -> Duration {
    Duration::from_secs(time.tv_sec.max(0) as u64)
        + Duration::from_micros(time.tv_usec.max(0) as u64)
}

/// Started at construction; read as many times as needed.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    wall: Instant,
    cpu: Option<Duration>,
}

/// Time since a [`Stopwatch`] started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub wall: Duration,
    pub cpu: Option<Duration>,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            wall: Instant::now(),
            cpu: cpu_time(),
        }
    }

    pub fn elapsed(&self) -> Elapsed {
        let cpu = match (self.cpu, cpu_time()) {
            (Some(start), Some(now)) => Some(now.saturating_sub(start)),
            _ => None,
        };
        Elapsed {
            wall: self.wall.elapsed(),
            cpu,
        }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s wall", self.wall.as_secs_f64())?;
        if let Some(cpu) = self.cpu {
            write!(f, ", {:.3}s cpu", cpu.as_secs_f64())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_cpu_time_advances_with_work() {
        let watch = Stopwatch::start();
        let mut x = 0u64;
        while watch.elapsed().cpu.unwrap_or_default() < Duration::from_millis(20) {
            for i in 0..100_000u64 {
                x = std::hint::black_box(x.wrapping_mul(31).wrapping_add(i));
            }
        }
        let elapsed = watch.elapsed();
        assert!(elapsed.cpu.unwrap() >= Duration::from_millis(20));
        assert!(elapsed.wall > Duration::ZERO);
    }

    #[test]
    fn test_display() {
        let both = Elapsed {
            wall: Duration::from_millis(1500),
            cpu: Some(Duration::from_millis(5250)),
        };
        assert_eq!(both.to_string(), "1.500s wall, 5.250s cpu");
        let wall_only = Elapsed {
            wall: Duration::from_millis(20),
            cpu: None,
        };
        assert_eq!(wall_only.to_string(), "0.020s wall");
    }
}

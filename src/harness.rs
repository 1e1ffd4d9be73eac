//! Wall-clock timing of repeated kernel invocations.
//!
//! The harness is decoupled from kernel signatures: it times a zero-argument
//! closure that already owns (or borrows) its buffers. Buffers are not reset
//! between trials, so every trial after the first overwrites the previous
//! trial's output with the same values.

use std::fmt;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// Elapsed time of one batch of trials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Number of trials covered by `elapsed`.
    pub trials: usize,
    /// Monotonic time spent inside the trials.
    pub elapsed: Duration,
    /// Wall-clock time at which the first trial started.
    pub started_at: DateTime<Local>,
}

impl Measurement {
    /// Elapsed time rounded down to whole milliseconds.
    pub fn millis(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    /// Mean time of a single trial, or zero when no trial ran.
    pub fn per_trial(&self) -> Duration {
        match u32::try_from(self.trials) {
            Ok(0) => Duration::ZERO,
            Ok(trials) => self.elapsed / trials,
            Err(_) => self.elapsed.div_f64(self.trials as f64),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} trials in {} ms (started {})",
            self.trials,
            self.millis(),
            self.started_at.format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

/// Invokes `trial` exactly `trial_count` times in sequence and measures the
/// whole span with a monotonic clock.
///
/// The first failing trial stops the measurement and its error is returned;
/// no partial timing is reported.
///
/// # Examples
///
/// ```rust
/// use simdfma::harness::measure_execution_time;
///
/// let mut calls = 0;
/// let m = measure_execution_time(5, || {
///     calls += 1;
///     Ok::<(), std::convert::Infallible>(())
/// })
/// .unwrap();
///
/// assert_eq!(calls, 5);
/// assert_eq!(m.trials, 5);
/// ```
pub fn measure_execution_time<F, E>(trial_count: usize, mut trial: F) -> Result<Measurement, E>
where
    F: FnMut() -> Result<(), E>,
{
    let started_at = Local::now();
    let start = Instant::now();

    for _ in 0..trial_count {
        trial()?;
    }

    let elapsed = start.elapsed();

    Ok(Measurement {
        trials: trial_count,
        elapsed,
        started_at,
    })
}

//! Benchmark configuration.
//!
//! The defaults reproduce the fixed benchmark: 1000 trials over vectors drawn
//! uniformly from `[0.0, 1.0]` with a fresh entropy seed on every run.

use crate::error::{invalid_argument, invalid_range, Result};

/// Number of kernel invocations timed together by default.
pub const TRIAL_COUNT: usize = 1000;

/// Default lower bound of the generated values.
pub const DEFAULT_LOW: f32 = 0.0;

/// Default upper bound of the generated values.
pub const DEFAULT_HIGH: f32 = 1.0;

/// Parameters of a single benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchConfig {
    /// How many times the kernel runs inside the timed span.
    pub trial_count: usize,
    /// Inclusive lower bound of the generated input values.
    pub low: f32,
    /// Inclusive upper bound of the generated input values.
    pub high: f32,
    /// Fixed generator seed; `None` draws from OS entropy on every run.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            trial_count: TRIAL_COUNT,
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn with_trial_count(mut self, trial_count: usize) -> Self {
        self.trial_count = trial_count;
        self
    }

    pub fn with_range(mut self, low: f32, high: f32) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the configuration can drive a benchmark.
    ///
    /// # Errors
    ///
    /// * [`FmaError::InvalidArgument`](crate::error::FmaError::InvalidArgument)
    ///   if `trial_count` is zero.
    /// * [`FmaError::InvalidRange`](crate::error::FmaError::InvalidRange) if
    ///   either bound is not finite or `low > high`.
    pub fn validate(&self) -> Result<()> {
        if self.trial_count == 0 {
            return Err(invalid_argument("trial count must be at least 1"));
        }

        validate_range(self.low, self.high)
    }
}

/// Checks that `[low, high]` is a finite, non-empty closed range.
pub(crate) fn validate_range(low: f32, high: f32) -> Result<()> {
    if !low.is_finite() || !high.is_finite() {
        return Err(invalid_range(low, high, "bounds must be finite"));
    }

    if low > high {
        return Err(invalid_range(low, high, "low must not exceed high"));
    }

    Ok(())
}

//! Human-readable rendering of a measurement.

use crate::harness::Measurement;

/// Fixed prefix of every benchmark result string.
pub const EXECUTION_TIME_PREFIX: &str = "Execution time [ms]: ";

/// Renders an elapsed time as `"Execution time [ms]: <millis>"`.
///
/// ```rust
/// use simdfma::report::format_execution_time;
///
/// assert_eq!(format_execution_time(17), "Execution time [ms]: 17");
/// ```
pub fn format_execution_time(millis: u64) -> String {
    format!("{EXECUTION_TIME_PREFIX}{millis}")
}

/// Shorthand for [`format_execution_time`] on a [`Measurement`].
pub fn format_measurement(measurement: &Measurement) -> String {
    format_execution_time(measurement.millis())
}

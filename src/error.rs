//! Error types for simdfma operations.
//!
//! Every failure the benchmark pipeline can report is a variant of
//! [`FmaError`]. Kernels validate their inputs before touching the output
//! buffer, so an error never leaves a partially written result behind.

use thiserror::Error;

/// Errors that can occur while preparing or running a benchmark.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FmaError {
    /// A caller-supplied argument violates a precondition.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Human-readable error message.
        message: String,
    },
    /// The bounds handed to the random generator do not form a usable range.
    #[error("Invalid range [{low}, {high}]: {message}")]
    InvalidRange {
        /// Lower bound that was requested.
        low: f32,
        /// Upper bound that was requested.
        high: f32,
        /// Human-readable error message.
        message: String,
    },
    /// The vector kernel was requested on a CPU that lacks the instructions.
    #[error("Unsupported hardware: the {kernel} kernel requires {feature}")]
    UnsupportedHardware {
        /// Name of the kernel that could not be selected.
        kernel: &'static str,
        /// Instruction set extension(s) that were missing.
        feature: &'static str,
    },
}

/// Result type alias for simdfma operations.
pub type Result<T> = std::result::Result<T, FmaError>;

/// Creates an invalid-argument error.
pub fn invalid_argument(message: impl Into<String>) -> FmaError {
    FmaError::InvalidArgument {
        message: message.into(),
    }
}

/// Creates the error reported when the four kernel buffers disagree in length.
pub fn length_mismatch(a: usize, b: usize, c: usize, result: usize) -> FmaError {
    invalid_argument(format!(
        "all vectors must be of the same size (a: {a}, b: {b}, c: {c}, result: {result})"
    ))
}

/// Creates an invalid-range error.
pub fn invalid_range(low: f32, high: f32, message: impl Into<String>) -> FmaError {
    FmaError::InvalidRange {
        low,
        high,
        message: message.into(),
    }
}

/// Creates an unsupported-hardware error.
pub fn unsupported_hardware(kernel: &'static str, feature: &'static str) -> FmaError {
    FmaError::UnsupportedHardware { kernel, feature }
}

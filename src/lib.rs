//! Micro-benchmark of a fused multiply-add over three `f32` vectors.
//!
//! Two functionally equivalent kernels compute `result[i] = a[i] * b[i] + c[i]`:
//!
//! - a portable scalar loop ([`simd::scalar`]), and
//! - a predicated vector kernel ([`simd::predicated`]) that walks the data in
//!   register-sized chunks and masks the lanes past the end of the vectors, so
//!   the tail needs no separate loop. It is backed by AVX2 + FMA3 on x86 and by
//!   NEON on AArch64, and selected at runtime after a CPU probe
//!   ([`simd::dispatch`]).
//!
//! [`run_calculations`] is the entry point used by the command-line shell: it
//! fills fresh random inputs, times 1000 kernel invocations and returns
//! `"Execution time [ms]: <n>"`.
//!
//! ```rust
//! let report = simdfma::run_calculations(false, 64).unwrap();
//! assert!(report.starts_with("Execution time [ms]: "));
//! ```

pub mod bench;
pub mod config;
pub mod error;
pub mod generator;
pub mod harness;
pub mod report;
pub mod simd;

pub use bench::run_benchmark;
pub use config::{BenchConfig, TRIAL_COUNT};
pub use error::{FmaError, Result};
pub use harness::Measurement;
pub use simd::{FmaKernel, KernelChoice};

/// Runs the default benchmark and returns the formatted execution time.
///
/// `use_vector_kernel` selects the predicated vector kernel instead of the
/// scalar one. The run uses [`TRIAL_COUNT`] trials over inputs drawn from
/// `[0.0, 1.0]` with a fresh entropy seed.
///
/// # Errors
///
/// Fails with [`FmaError::UnsupportedHardware`] if the vector kernel is
/// requested on a CPU that has none; check
/// [`simd::vector_kernel_available`] first to avoid it.
pub fn run_calculations(use_vector_kernel: bool, vector_length: usize) -> Result<String> {
    let measurement = run_benchmark(
        &BenchConfig::default(),
        KernelChoice::from(use_vector_kernel),
        vector_length,
    )?;

    Ok(report::format_measurement(&measurement))
}

//! The benchmark pipeline: generate inputs, time the kernel, report.

use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::error::Result;
use crate::generator::RandomVectorGenerator;
use crate::harness::{measure_execution_time, Measurement};
use crate::simd::dispatch::{select_kernel, KernelChoice};

/// Runs one benchmark and returns its measurement.
///
/// Three input vectors and one output vector of `vector_length` elements are
/// allocated and filled before the clock starts; only the `trial_count` kernel
/// invocations are timed. All buffers are owned by this call, so concurrent
/// callers never share state.
///
/// # Errors
///
/// * invalid configuration ([`BenchConfig::validate`])
/// * vector kernel requested on a CPU without one
/// * a kernel precondition failure, which aborts the whole run
pub fn run_benchmark(
    config: &BenchConfig,
    choice: KernelChoice,
    vector_length: usize,
) -> Result<Measurement> {
    config.validate()?;

    let kernel = select_kernel(choice)?;
    debug!(
        kernel = kernel.name(),
        lanes = kernel.lane_count(),
        vector_length,
        "selected kernel"
    );

    let mut generator = RandomVectorGenerator::from_config(config)?;
    let a = generator.generate(vector_length);
    let b = generator.generate(vector_length);
    let c = generator.generate(vector_length);
    let mut result = vec![0.0f32; vector_length];
    debug!(vector_length, seeded = config.seed.is_some(), "prepared input buffers");

    let measurement = measure_execution_time(config.trial_count, || {
        kernel.fma(&a, &b, &c, &mut result)
    })?;

    info!(
        kernel = kernel.name(),
        vector_length,
        trials = measurement.trials,
        elapsed_ms = measurement.millis(),
        "benchmark finished"
    );

    Ok(measurement)
}

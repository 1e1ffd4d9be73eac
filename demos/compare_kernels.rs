//! Runs the benchmark with both kernels on a few vector lengths and prints
//! the reports side by side.
//!
//! ```text
//! cargo run --release --example compare_kernels
//! RUST_LOG=simdfma=debug cargo run --release --example compare_kernels
//! ```

use simdfma::simd::{vector_kernel, CpuFeatures};
use simdfma::{run_calculations, FmaError};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("CPU features: {}", CpuFeatures::detect());
    match vector_kernel() {
        Some(kernel) => println!(
            "Vector kernel: {} ({} lanes)\n",
            kernel.name(),
            kernel.lane_count()
        ),
        None => println!("Vector kernel: unavailable\n"),
    }

    for length in [1, 8, 9, 1_000, 100_000, 1_000_000] {
        println!("Vector length {length}");

        match run_calculations(false, length) {
            Ok(report) => println!("   scalar: {report}"),
            Err(e) => println!("   scalar: error: {e}"),
        }

        match run_calculations(true, length) {
            Ok(report) => println!("   vector: {report}"),
            Err(FmaError::UnsupportedHardware { feature, .. }) => {
                println!("   vector: skipped (requires {feature})")
            }
            Err(e) => println!("   vector: error: {e}"),
        }
    }
}

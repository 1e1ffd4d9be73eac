use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use simdfma::config::{BenchConfig, DEFAULT_HIGH, DEFAULT_LOW, TRIAL_COUNT};
use simdfma::report::format_measurement;
use simdfma::simd::{vector_kernel, CpuFeatures, KernelChoice};

/// Times a scalar or predicated-SIMD fused multiply-add over random vectors.
#[derive(Parser, Debug)]
#[command(name = "simdfma", version, about)]
struct Cli {
    /// Number of elements in each vector
    #[arg(required_unless_present = "info")]
    length: Option<usize>,

    /// Use the predicated vector kernel instead of the scalar one
    #[arg(long)]
    vector: bool,

    /// Number of timed kernel invocations
    #[arg(long, default_value_t = TRIAL_COUNT)]
    trials: usize,

    /// Seed the input generator for reproducible data
    #[arg(long)]
    seed: Option<u64>,

    /// Lower bound of the generated values
    #[arg(long, default_value_t = DEFAULT_LOW, allow_negative_numbers = true)]
    low: f32,

    /// Upper bound of the generated values
    #[arg(long, default_value_t = DEFAULT_HIGH, allow_negative_numbers = true)]
    high: f32,

    /// Print the detected CPU features and vector kernel, then exit
    #[arg(long)]
    info: bool,

    /// Also print the trial count and start time of the measurement
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> BenchConfig {
        let config = BenchConfig::default()
            .with_trial_count(self.trials)
            .with_range(self.low, self.high);

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn print_info() {
    println!("CPU features: {}", CpuFeatures::detect());
    match vector_kernel() {
        Some(kernel) => println!(
            "Vector kernel: {} ({} lanes)",
            kernel.name(),
            kernel.lane_count()
        ),
        None => println!("Vector kernel: unavailable"),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.info {
        print_info();
        return ExitCode::SUCCESS;
    }

    let Some(length) = cli.length else {
        eprintln!("error: a vector length is required");
        return ExitCode::FAILURE;
    };

    match simdfma::run_benchmark(&cli.config(), KernelChoice::from(cli.vector), length) {
        Ok(measurement) => {
            println!("{}", format_measurement(&measurement));
            if cli.verbose {
                println!("{measurement}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

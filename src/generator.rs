//! Random input vectors for the benchmark.
//!
//! Values are drawn independently from a continuous uniform distribution over
//! a closed range. By default every generator is seeded from OS entropy, so two
//! runs never see the same data; [`RandomVectorGenerator::seeded`] exists for
//! tests and for comparing kernels on identical inputs.

use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{validate_range, BenchConfig};
use crate::error::{invalid_range, Result};

/// Uniform `f32` vector generator over `[low, high]`.
#[derive(Debug, Clone)]
pub struct RandomVectorGenerator {
    rng: StdRng,
    distribution: Uniform<f32>,
}

impl RandomVectorGenerator {
    /// Creates a generator seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`FmaError::InvalidRange`](crate::error::FmaError::InvalidRange)
    /// if a bound is not finite or `low > high`.
    pub fn from_entropy(low: f32, high: f32) -> Result<Self> {
        Self::with_rng(StdRng::from_os_rng(), low, high)
    }

    /// Creates a deterministic generator: the same seed yields the same vectors.
    pub fn seeded(seed: u64, low: f32, high: f32) -> Result<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed), low, high)
    }

    /// Creates the generator described by a benchmark configuration.
    pub fn from_config(config: &BenchConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::seeded(seed, config.low, config.high),
            None => Self::from_entropy(config.low, config.high),
        }
    }

    fn with_rng(rng: StdRng, low: f32, high: f32) -> Result<Self> {
        validate_range(low, high)?;

        let distribution = Uniform::new_inclusive(low, high)
            .map_err(|e| invalid_range(low, high, e.to_string()))?;

        Ok(Self { rng, distribution })
    }

    /// Returns a freshly allocated vector of `n` samples. `n == 0` yields an
    /// empty vector.
    pub fn generate(&mut self, n: usize) -> Vec<f32> {
        (0..n)
            .map(|_| self.distribution.sample(&mut self.rng))
            .collect()
    }
}

/// Generates `n` values uniformly distributed over `[low, high]` using a
/// fresh entropy seed.
///
/// # Examples
///
/// ```rust
/// use simdfma::generator::generate_random_vector;
///
/// let v = generate_random_vector(16, 0.0, 1.0).unwrap();
/// assert_eq!(v.len(), 16);
/// assert!(v.iter().all(|x| (0.0..=1.0).contains(x)));
/// ```
pub fn generate_random_vector(n: usize, low: f32, high: f32) -> Result<Vec<f32>> {
    Ok(RandomVectorGenerator::from_entropy(low, high)?.generate(n))
}

use crate::error::Result;
use crate::simd::neon::f32x4::{self, F32x4};
use crate::simd::predicated::predicated_fma;
use crate::simd::{ensure_same_len, traits::FmaKernel};

/// Predicated FMA kernel for AArch64 NEON.
#[derive(Debug)]
pub struct NeonFma {
    _probed: (),
}

static NEON_FMA: NeonFma = NeonFma { _probed: () };

impl NeonFma {
    /// Returns the kernel if the running CPU reports NEON.
    pub fn detect() -> Option<&'static Self> {
        if std::arch::is_aarch64_feature_detected!("neon") {
            Some(&NEON_FMA)
        } else {
            None
        }
    }
}

/// # Safety
///
/// The CPU must support NEON, and all slices must share one length.
#[target_feature(enable = "neon")]
unsafe fn neon_fma(a: &[f32], b: &[f32], c: &[f32], result: &mut [f32]) {
    predicated_fma::<F32x4>(a, b, c, result)
}

impl FmaKernel for NeonFma {
    fn name(&self) -> &'static str {
        "neon"
    }

    fn lane_count(&self) -> usize {
        f32x4::LANE_COUNT
    }

    #[inline(always)]
    fn fma(&self, a: &[f32], b: &[f32], c: &[f32], result: &mut [f32]) -> Result<()> {
        ensure_same_len(a, b, c, result)?;

        // SAFETY: `self` only exists after `detect` confirmed NEON, and the
        // lengths were checked above.
        unsafe { neon_fma(a, b, c, result) };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::scalar::scalar_fma;

    #[test]
    fn test_matches_scalar_across_tails() {
        let Some(kernel) = NeonFma::detect() else { return };

        for n in 0..=3 * f32x4::LANE_COUNT + 1 {
            let a: Vec<f32> = (0..n).map(|i| i as f32 * 0.25).collect();
            let b: Vec<f32> = (0..n).map(|i| 1.0 - i as f32 * 0.125).collect();
            let c: Vec<f32> = (0..n).map(|i| (i % 3) as f32).collect();

            let mut expected = vec![0.0f32; n];
            let mut actual = vec![0.0f32; n];
            scalar_fma(&a, &b, &c, &mut expected).unwrap();
            kernel.fma(&a, &b, &c, &mut actual).unwrap();

            for (i, (e, r)) in expected.iter().zip(&actual).enumerate() {
                assert!((e - r).abs() <= 1e-5, "n={n} i={i}: scalar={e} neon={r}");
            }
        }
    }

    #[test]
    fn test_does_not_write_past_result() {
        let Some(kernel) = NeonFma::detect() else { return };

        let n = f32x4::LANE_COUNT + 1;
        let inputs = vec![1.0f32; n];
        let mut buffer = vec![-7.0f32; n + f32x4::LANE_COUNT];

        kernel
            .fma(&inputs, &inputs, &inputs, &mut buffer[..n])
            .unwrap();

        assert!(buffer[..n].iter().all(|&x| x == 2.0));
        assert!(buffer[n..].iter().all(|&x| x == -7.0));
    }

    #[test]
    fn test_mismatched_lengths_fail() {
        let Some(kernel) = NeonFma::detect() else { return };

        let a = vec![1.0f32; 10];
        let b = vec![1.0f32; 5];
        let mut result = vec![0.0f32; 10];

        assert!(kernel.fma(&a, &b, &a, &mut result).is_err());
    }
}

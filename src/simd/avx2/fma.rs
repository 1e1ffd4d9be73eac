use crate::error::Result;
use crate::simd::avx2::f32x8::{self, F32x8};
use crate::simd::predicated::predicated_fma;
use crate::simd::{ensure_same_len, traits::FmaKernel};

/// Predicated FMA kernel for CPUs with AVX2 and FMA3.
///
/// The private field keeps construction inside the crate: the only instance is
/// returned by [`Avx2Fma::detect`], after the CPU has reported both features.
#[derive(Debug)]
pub struct Avx2Fma {
    _probed: (),
}

static AVX2_FMA: Avx2Fma = Avx2Fma { _probed: () };

impl Avx2Fma {
    /// Returns the kernel if the running CPU supports AVX2 and FMA3.
    pub fn detect() -> Option<&'static Self> {
        if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
            Some(&AVX2_FMA)
        } else {
            None
        }
    }
}

/// # Safety
///
/// The CPU must support AVX2 and FMA3, and all slices must share one length.
#[target_feature(enable = "avx2,fma")]
unsafe fn avx2_fma(a: &[f32], b: &[f32], c: &[f32], result: &mut [f32]) {
    predicated_fma::<F32x8>(a, b, c, result)
}

impl FmaKernel for Avx2Fma {
    fn name(&self) -> &'static str {
        "avx2"
    }

    fn lane_count(&self) -> usize {
        f32x8::LANE_COUNT
    }

    #[inline(always)]
    fn fma(&self, a: &[f32], b: &[f32], c: &[f32], result: &mut [f32]) -> Result<()> {
        ensure_same_len(a, b, c, result)?;

        // SAFETY: `self` only exists after `detect` confirmed AVX2 and FMA3,
        // and the lengths were checked above.
        unsafe { avx2_fma(a, b, c, result) };

        Ok(())
    }
}

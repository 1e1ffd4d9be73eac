use crate::error::Result;
use crate::simd::{ensure_same_len, traits::FmaKernel};

/// Portable kernel built on ordinary `f32` arithmetic. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarFma;

pub(crate) static SCALAR_FMA: ScalarFma = ScalarFma;

/// Computes `result[i] = a[i] * b[i] + c[i]` with a separate multiply and add.
///
/// # Errors
///
/// Fails with an invalid-argument error, before writing anything, if the four
/// slices do not all have the same length.
///
/// # Examples
///
/// ```rust
/// use simdfma::simd::scalar::scalar_fma;
///
/// let a = [1.0f32, 2.0, 3.0];
/// let b = [4.0f32, 5.0, 6.0];
/// let c = [0.5f32, 0.5, 0.5];
/// let mut result = [0.0f32; 3];
///
/// scalar_fma(&a, &b, &c, &mut result).unwrap();
/// assert_eq!(result, [4.5, 10.5, 18.5]);
/// ```
#[inline(always)]
pub fn scalar_fma(a: &[f32], b: &[f32], c: &[f32], result: &mut [f32]) -> Result<()> {
    ensure_same_len(a, b, c, result)?;

    for (((r, &x), &y), &z) in result.iter_mut().zip(a).zip(b).zip(c) {
        *r = x * y + z;
    }

    Ok(())
}

impl FmaKernel for ScalarFma {
    fn name(&self) -> &'static str {
        "scalar"
    }

    fn lane_count(&self) -> usize {
        1
    }

    #[inline(always)]
    fn fma(&self, a: &[f32], b: &[f32], c: &[f32], result: &mut [f32]) -> Result<()> {
        scalar_fma(a, b, c, result)
    }
}

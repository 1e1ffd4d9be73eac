#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod avx2;

#[cfg(target_arch = "aarch64")]
pub mod neon;

pub mod dispatch;
pub mod predicated;
pub mod scalar;
pub mod traits;

pub use dispatch::{select_kernel, vector_kernel, vector_kernel_available, CpuFeatures, KernelChoice};
pub use scalar::{scalar_fma, ScalarFma};
pub use traits::{FmaKernel, PredicatedVec};

use crate::error::{length_mismatch, Result};

/// Fails unless the three inputs and the output have the same length.
#[inline(always)]
pub(crate) fn ensure_same_len(a: &[f32], b: &[f32], c: &[f32], result: &[f32]) -> Result<()> {
    let n = a.len();

    if b.len() != n || c.len() != n || result.len() != n {
        return Err(length_mismatch(n, b.len(), c.len(), result.len()));
    }

    Ok(())
}

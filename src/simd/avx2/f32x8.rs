//! AVX2 8-lane f32 SIMD vector with mask-register predication.
//!
//! AVX2 has no dedicated predicate registers, but `_mm256_maskload_ps` and
//! `_mm256_maskstore_ps` take a per-lane mask in an integer vector: a lane whose
//! sign bit is clear is neither read nor written, and cannot fault. [`Mask8`]
//! plays the role of the predicate and is built with a single compare against
//! the lane indices, so partial and full chunks cost the same.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: AVX2 and FMA3 (Intel Haswell / AMD Piledriver and later)
//! - **Target Architecture**: x86 or x86_64
//! - **Runtime Detection**: only reachable through [`Avx2Fma`](super::fma::Avx2Fma),
//!   which is handed out after `is_x86_feature_detected!` succeeds

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::traits::PredicatedVec;

/// Number of f32 elements that fit in an AVX2 256-bit vector.
pub(crate) const LANE_COUNT: usize = 8;

/// Active-lane mask for [`F32x8`] memory accesses.
#[derive(Copy, Clone, Debug)]
pub struct Mask8 {
    /// Number of leading active lanes (0-8).
    pub active: usize,
    /// Lane `k` is all ones when active, zero otherwise.
    pub bits: __m256i,
}

/// AVX2 SIMD vector containing 8 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x8 {
    /// Number of valid elements in the vector (0-8)
    pub size: usize,
    /// AVX2 256-bit vector register containing 8 packed f32 values
    pub elements: __m256,
}

impl PredicatedVec for F32x8 {
    const LANE_COUNT: usize = LANE_COUNT;

    type Predicate = Mask8;

    /// Compares the lane indices `0..8` against the number of remaining
    /// elements, which yields the leading-ones mask directly.
    #[inline(always)]
    unsafe fn whilelt(start: usize, end: usize) -> Mask8 {
        let active = end.saturating_sub(start).min(LANE_COUNT);

        let lane_index = _mm256_setr_epi32(0, 1, 2, 3, 4, 5, 6, 7);
        let remaining = _mm256_set1_epi32(active as i32);

        Mask8 {
            active,
            bits: _mm256_cmpgt_epi32(remaining, lane_index),
        }
    }

    /// Uses `_mm256_maskload_ps`; masked-off lanes read as `0.0`.
    #[inline(always)]
    unsafe fn load_predicated(pg: Mask8, ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: _mm256_maskload_ps(ptr, pg.bits),
            size: pg.active,
        }
    }

    /// `_mm256_fmadd_ps(a, b, self)`: one rounding step per lane.
    #[inline(always)]
    unsafe fn fmadd(self, a: Self, b: Self) -> Self {
        Self {
            elements: _mm256_fmadd_ps(a.elements, b.elements, self.elements),
            size: self.size,
        }
    }

    #[inline(always)]
    unsafe fn store_predicated(self, pg: Mask8, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        _mm256_maskstore_ps(ptr, pg.bits, self.elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avx2_fma_available() -> bool {
        is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
    }

    /// Helper function to extract vector elements for comparison in tests
    fn extract_elements(vec: &F32x8) -> [f32; 8] {
        let mut result = [0.0f32; 8];
        unsafe { _mm256_storeu_ps(result.as_mut_ptr(), vec.elements) };
        result
    }

    fn extract_mask(pg: &Mask8) -> [i32; 8] {
        let mut result = [0i32; 8];
        unsafe { _mm256_storeu_si256(result.as_mut_ptr() as *mut __m256i, pg.bits) };
        result
    }

    mod predicate_tests {
        use super::*;

        #[test]
        fn test_whilelt_every_active_count() {
            if !avx2_fma_available() {
                return;
            }

            for remaining in 0..=LANE_COUNT {
                let pg = unsafe { F32x8::whilelt(100, 100 + remaining) };
                assert_eq!(pg.active, remaining);

                let bits = extract_mask(&pg);
                for (k, &bit) in bits.iter().enumerate() {
                    let expected = if k < remaining { -1 } else { 0 };
                    assert_eq!(bit, expected, "lane {k} for remaining {remaining}");
                }
            }
        }

        #[test]
        fn test_whilelt_saturates() {
            if !avx2_fma_available() {
                return;
            }

            let pg = unsafe { F32x8::whilelt(0, 1_000_000) };
            assert_eq!(pg.active, LANE_COUNT);
            assert_eq!(extract_mask(&pg), [-1; 8]);

            let past_end = unsafe { F32x8::whilelt(16, 10) };
            assert_eq!(past_end.active, 0);
            assert_eq!(extract_mask(&past_end), [0; 8]);
        }
    }

    mod load_store_tests {
        use super::*;

        #[test]
        fn test_full_load_store() {
            if !avx2_fma_available() {
                return;
            }

            let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
            let mut out = [0.0f32; 8];

            unsafe {
                let pg = F32x8::whilelt(0, 8);
                let v = F32x8::load_predicated(pg, data.as_ptr());
                assert_eq!(v.size, 8);
                v.store_predicated(pg, out.as_mut_ptr());
            }

            assert_eq!(out, data);
        }

        #[test]
        fn test_partial_load_zero_fills() {
            if !avx2_fma_available() {
                return;
            }

            let data = [1.0f32, 2.0, 3.0];
            let v = unsafe { F32x8::load_predicated(F32x8::whilelt(0, 3), data.as_ptr()) };

            assert_eq!(v.size, 3);
            assert_eq!(extract_elements(&v), [1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        }

        #[test]
        fn test_partial_store_leaves_inactive_lanes() {
            if !avx2_fma_available() {
                return;
            }

            for size in 1..LANE_COUNT {
                let data: Vec<f32> = (0..LANE_COUNT).map(|i| (i + 1) as f32).collect();
                let mut buffer = [-1.0f32; 8];

                unsafe {
                    let pg = F32x8::whilelt(0, size);
                    let v = F32x8::load_predicated(pg, data.as_ptr());
                    v.store_predicated(pg, buffer.as_mut_ptr());
                }

                for (i, e) in buffer.iter().enumerate().take(size) {
                    assert_eq!(*e, (i + 1) as f32, "Mismatch at index {i} for size {size}");
                }
                for (i, e) in buffer.iter().enumerate().skip(size) {
                    assert_eq!(*e, -1.0, "Overwritten lane at index {i} for size {size}");
                }
            }
        }
    }

    mod arithmetic_tests {
        use super::*;

        #[test]
        fn test_fmadd_lanes() {
            if !avx2_fma_available() {
                return;
            }

            let a = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
            let b = [0.5f32; 8];
            let c = [10.0f32; 8];

            let result = unsafe {
                let pg = F32x8::whilelt(0, 8);
                let va = F32x8::load_predicated(pg, a.as_ptr());
                let vb = F32x8::load_predicated(pg, b.as_ptr());
                let vc = F32x8::load_predicated(pg, c.as_ptr());
                vc.fmadd(va, vb)
            };

            assert_eq!(
                extract_elements(&result),
                [10.5, 11.0, 11.5, 12.0, 12.5, 13.0, 13.5, 14.0]
            );
        }

        #[test]
        fn test_fmadd_single_rounding() {
            if !avx2_fma_available() {
                return;
            }

            // (1 + 2^-12)^2 - 1 keeps the 2^-24 term only when the product is not rounded.
            let x = 1.0f32 + f32::EPSILON * 2048.0;
            let a = [x; 8];
            let c = [-1.0f32; 8];

            let result = unsafe {
                let pg = F32x8::whilelt(0, 8);
                let va = F32x8::load_predicated(pg, a.as_ptr());
                let vc = F32x8::load_predicated(pg, c.as_ptr());
                vc.fmadd(va, va)
            };

            let expected = x.mul_add(x, -1.0);
            assert!(extract_elements(&result).iter().all(|&r| r == expected));
        }
    }
}

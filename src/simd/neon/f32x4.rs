#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use crate::simd::traits::PredicatedVec;

pub const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    size: usize,
    elements: float32x4_t,
}

/// Emulated predicate: lanes `0..active` take part in memory accesses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LaneCount {
    pub active: usize,
}

impl F32x4 {
    /// Number of lanes that were active when this vector was loaded.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }
}

impl PredicatedVec for F32x4 {
    const LANE_COUNT: usize = LANE_COUNT;

    type Predicate = LaneCount;

    #[inline(always)]
    unsafe fn whilelt(start: usize, end: usize) -> LaneCount {
        LaneCount {
            active: end.saturating_sub(start).min(LANE_COUNT),
        }
    }

    #[inline(always)]
    unsafe fn load_predicated(pg: LaneCount, ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let elements = if pg.active == LANE_COUNT {
            vld1q_f32(ptr)
        } else {
            // Only the active lanes are read; the rest stay zero.
            let mut lanes = [0.0f32; LANE_COUNT];
            std::ptr::copy_nonoverlapping(ptr, lanes.as_mut_ptr(), pg.active);
            vld1q_f32(lanes.as_ptr())
        };

        Self {
            elements,
            size: pg.active,
        }
    }

    /// `vfmaq_f32(self, a, b)` computes `self + a * b` with one rounding.
    #[inline(always)]
    unsafe fn fmadd(self, a: Self, b: Self) -> Self {
        Self {
            elements: vfmaq_f32(self.elements, a.elements, b.elements),
            size: self.size,
        }
    }

    #[inline(always)]
    unsafe fn store_predicated(self, pg: LaneCount, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        if pg.active == LANE_COUNT {
            vst1q_f32(ptr, self.elements);
        } else {
            let mut lanes = [0.0f32; LANE_COUNT];
            vst1q_f32(lanes.as_mut_ptr(), self.elements);
            std::ptr::copy_nonoverlapping(lanes.as_ptr(), ptr, pg.active);
        }
    }
}

//! Branch-free chunk loop shared by every predicated backend.
//!
//! Each iteration covers `[i, i + LANE_COUNT)`. The predicate built by
//! [`PredicatedVec::whilelt`] disables the lanes at or beyond `n`, so the last,
//! possibly partial, chunk goes through exactly the same load / fmadd / store
//! sequence as every full chunk and no scalar tail loop is needed.

use crate::simd::traits::PredicatedVec;

/// Writes `a[i] * b[i] + c[i]` into `result[i]` for every `i < result.len()`.
///
/// # Safety
///
/// * The CPU must support the instruction set backing `V`.
/// * `a`, `b` and `c` must be at least as long as `result`.
#[inline(always)]
pub(crate) unsafe fn predicated_fma<V: PredicatedVec>(
    a: &[f32],
    b: &[f32],
    c: &[f32],
    result: &mut [f32],
) {
    debug_assert!(a.len() >= result.len());
    debug_assert!(b.len() >= result.len());
    debug_assert!(c.len() >= result.len());

    let n = result.len();
    let step = V::LANE_COUNT;

    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();
    let c_ptr = c.as_ptr();
    let r_ptr = result.as_mut_ptr();

    let mut i = 0;
    while i < n {
        let pg = V::whilelt(i, n);

        let va = V::load_predicated(pg, a_ptr.add(i));
        let vb = V::load_predicated(pg, b_ptr.add(i));
        let vc = V::load_predicated(pg, c_ptr.add(i));

        vc.fmadd(va, vb).store_predicated(pg, r_ptr.add(i));

        i += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lane-by-lane model of a predicated register, used to check the loop
    /// itself independently of any instruction set.
    #[derive(Copy, Clone, Debug)]
    struct Emulated3 {
        lanes: [f32; 3],
    }

    impl PredicatedVec for Emulated3 {
        const LANE_COUNT: usize = 3;
        type Predicate = [bool; 3];

        unsafe fn whilelt(start: usize, end: usize) -> Self::Predicate {
            [start < end, start + 1 < end, start + 2 < end]
        }

        unsafe fn load_predicated(pg: Self::Predicate, ptr: *const f32) -> Self {
            let mut lanes = [0.0; 3];
            for (k, lane) in lanes.iter_mut().enumerate() {
                if pg[k] {
                    *lane = *ptr.add(k);
                }
            }
            Self { lanes }
        }

        unsafe fn fmadd(self, a: Self, b: Self) -> Self {
            let mut lanes = self.lanes;
            for (k, lane) in lanes.iter_mut().enumerate() {
                *lane = a.lanes[k].mul_add(b.lanes[k], *lane);
            }
            Self { lanes }
        }

        unsafe fn store_predicated(self, pg: Self::Predicate, ptr: *mut f32) {
            for (k, &lane) in self.lanes.iter().enumerate() {
                if pg[k] {
                    *ptr.add(k) = lane;
                }
            }
        }
    }

    #[test]
    fn test_every_tail_length() {
        for n in 0..=10 {
            let a: Vec<f32> = (0..n).map(|i| i as f32).collect();
            let b = vec![2.0f32; n];
            let c = vec![1.0f32; n];
            let mut result = vec![0.0f32; n];

            unsafe { predicated_fma::<Emulated3>(&a, &b, &c, &mut result) };

            for (i, &r) in result.iter().enumerate() {
                assert_eq!(r, 2.0 * i as f32 + 1.0, "mismatch at {i} for n={n}");
            }
        }
    }

    #[test]
    fn test_lanes_past_end_untouched() {
        let a = vec![1.0f32; 4];
        let b = vec![1.0f32; 4];
        let c = vec![1.0f32; 4];
        let mut buffer = vec![-1.0f32; 6];

        unsafe { predicated_fma::<Emulated3>(&a, &b, &c, &mut buffer[..4]) };

        assert_eq!(&buffer[..4], &[2.0; 4]);
        assert_eq!(&buffer[4..], &[-1.0; 2]);
    }
}

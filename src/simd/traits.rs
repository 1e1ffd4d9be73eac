use crate::error::Result;

/// A fused multiply-add kernel over three equal-length input slices.
///
/// Implementations compute `result[i] = a[i] * b[i] + c[i]` for every index.
/// The accelerated implementations are only handed out by
/// [`dispatch`](crate::simd::dispatch) after the running CPU has been probed,
/// so calling [`FmaKernel::fma`] is always safe.
pub trait FmaKernel: Send + Sync {
    /// Short human-readable name of the kernel (e.g. `"avx2"`).
    fn name(&self) -> &'static str;

    /// Number of `f32` elements processed per instruction.
    fn lane_count(&self) -> usize;

    /// Writes `a[i] * b[i] + c[i]` into `result[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`FmaError::InvalidArgument`](crate::error::FmaError::InvalidArgument)
    /// without writing anything when the four slices differ in length.
    fn fma(&self, a: &[f32], b: &[f32], c: &[f32], result: &mut [f32]) -> Result<()>;
}

/// A hardware vector register of `f32` lanes with per-lane predication.
///
/// The predicate decides which lanes take part in a memory access; inactive
/// lanes are neither read nor written. This is what lets a single chunk loop
/// handle a tail shorter than the register width.
pub trait PredicatedVec: Copy {
    /// Number of `f32` lanes in one register.
    const LANE_COUNT: usize;

    /// Active-lane mask produced by [`PredicatedVec::whilelt`].
    type Predicate: Copy;

    /// Builds a predicate whose lane `k` is active iff `start + k < end`.
    ///
    /// # Safety
    ///
    /// The CPU must support the instruction set backing `Self`.
    unsafe fn whilelt(start: usize, end: usize) -> Self::Predicate;

    /// Loads the active lanes from `ptr`; inactive lanes are zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of every active lane.
    unsafe fn load_predicated(pg: Self::Predicate, ptr: *const f32) -> Self;

    /// Computes `self + a * b` with a single rounding per lane.
    ///
    /// # Safety
    ///
    /// The CPU must support the instruction set backing `Self`.
    unsafe fn fmadd(self, a: Self, b: Self) -> Self;

    /// Stores the active lanes to `ptr`, leaving memory under inactive lanes untouched.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of every active lane.
    unsafe fn store_predicated(self, pg: Self::Predicate, ptr: *mut f32);
}

//! Runtime capability probe and kernel selection.
//!
//! The probe runs once per process and its result is cached. Accelerated
//! kernels are only ever returned from here, after the CPU has confirmed the
//! instruction sets they are compiled for.

use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::error::{unsupported_hardware, Result};
use crate::simd::scalar::SCALAR_FMA;
use crate::simd::traits::FmaKernel;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
const VECTOR_REQUIREMENT: &str = "avx2 and fma";

#[cfg(target_arch = "aarch64")]
const VECTOR_REQUIREMENT: &str = "neon";

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
const VECTOR_REQUIREMENT: &str = "an x86 (avx2 + fma) or aarch64 (neon) CPU";

static CPU_FEATURES: OnceLock<CpuFeatures> = OnceLock::new();

static VECTOR_KERNEL: OnceLock<Option<&'static dyn FmaKernel>> = OnceLock::new();

/// Instruction set extensions relevant to the vector kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuFeatures {
    pub avx2: bool,
    pub fma: bool,
    pub neon: bool,
}

impl CpuFeatures {
    /// Queries the running CPU. Cached after the first call.
    pub fn detect() -> Self {
        *CPU_FEATURES.get_or_init(|| {
            let features = Self::probe();
            debug!(?features, "probed CPU features");
            features
        })
    }

    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    fn probe() -> Self {
        Self {
            avx2: is_x86_feature_detected!("avx2"),
            fma: is_x86_feature_detected!("fma"),
            neon: false,
        }
    }

    #[cfg(target_arch = "aarch64")]
    fn probe() -> Self {
        Self {
            avx2: false,
            fma: false,
            neon: std::arch::is_aarch64_feature_detected!("neon"),
        }
    }

    #[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
    fn probe() -> Self {
        Self::default()
    }
}

impl fmt::Display for CpuFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |on: bool| if on { "yes" } else { "no" };
        write!(
            f,
            "avx2: {}, fma: {}, neon: {}",
            flag(self.avx2),
            flag(self.fma),
            flag(self.neon)
        )
    }
}

/// Which of the two kernel variants a benchmark run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelChoice {
    Scalar,
    Vector,
}

impl From<bool> for KernelChoice {
    /// `true` selects the vector kernel, matching the shell's checkbox.
    fn from(use_vector_kernel: bool) -> Self {
        if use_vector_kernel {
            KernelChoice::Vector
        } else {
            KernelChoice::Scalar
        }
    }
}

impl fmt::Display for KernelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelChoice::Scalar => f.write_str("scalar"),
            KernelChoice::Vector => f.write_str("vector"),
        }
    }
}

/// Returns the predicated vector kernel for this CPU, if there is one.
pub fn vector_kernel() -> Option<&'static dyn FmaKernel> {
    *VECTOR_KERNEL.get_or_init(|| {
        let kernel = detect_vector_kernel();
        match kernel {
            Some(k) => debug!(kernel = k.name(), lanes = k.lane_count(), "vector kernel available"),
            None => debug!("no vector kernel for this CPU"),
        }
        kernel
    })
}

/// Whether [`KernelChoice::Vector`] can be selected on this CPU.
pub fn vector_kernel_available() -> bool {
    vector_kernel().is_some()
}

/// Resolves a [`KernelChoice`] to a concrete kernel.
///
/// # Errors
///
/// Returns [`FmaError::UnsupportedHardware`](crate::error::FmaError::UnsupportedHardware)
/// when the vector kernel is requested on a CPU without the required extensions.
pub fn select_kernel(choice: KernelChoice) -> Result<&'static dyn FmaKernel> {
    match choice {
        KernelChoice::Scalar => Ok(&SCALAR_FMA),
        KernelChoice::Vector => vector_kernel().ok_or_else(|| {
            warn!(required = VECTOR_REQUIREMENT, "vector kernel requested but unavailable");
            unsupported_hardware("vector", VECTOR_REQUIREMENT)
        }),
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn detect_vector_kernel() -> Option<&'static dyn FmaKernel> {
    crate::simd::avx2::fma::Avx2Fma::detect().map(|k| k as &'static dyn FmaKernel)
}

#[cfg(target_arch = "aarch64")]
fn detect_vector_kernel() -> Option<&'static dyn FmaKernel> {
    crate::simd::neon::fma::NeonFma::detect().map(|k| k as &'static dyn FmaKernel)
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
fn detect_vector_kernel() -> Option<&'static dyn FmaKernel> {
    None
}

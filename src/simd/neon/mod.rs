//! ARM NEON SIMD implementations for 128-bit vector operations.
//!
//! NEON is mandatory on AArch64, so this backend is available on every 64-bit
//! ARM CPU (Apple Silicon, AWS Graviton, modern Android devices). Unlike SVE,
//! NEON has no predicate registers: [`f32x4::F32x4`] emulates the active-lane
//! predicate by moving only the active lanes through a zero-initialised lane
//! buffer, which keeps the tail chunk on the same code path as full chunks.
//!
//! # Available Types
//!
//! - [`f32x4::F32x4`]: 128-bit vector of 4 packed single-precision values
//! - [`fma::NeonFma`]: the [`FmaKernel`](crate::simd::traits::FmaKernel) built on it

pub mod f32x4;

pub mod fma;

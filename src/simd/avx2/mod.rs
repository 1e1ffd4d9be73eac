//! AVX2 SIMD implementations for 256-bit vector operations.
//!
//! This module contains the x86 backend of the predicated FMA kernel, built on
//! Intel's Advanced Vector Extensions 2 (AVX2) and the FMA3 extension. AVX2 is
//! available on most Intel processors since Haswell (2013) and AMD processors
//! since Excavator (2015).
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: AVX2 + FMA3
//! - **Target Architecture**: x86 or x86_64
//! - **Compilation**: no global target flags needed; the kernel is compiled with
//!   `#[target_feature(enable = "avx2,fma")]` and selected after a runtime probe
//!
//! # Available Types
//!
//! - [`f32x8::F32x8`]: 256-bit vector containing 8 packed single-precision values
//! - [`f32x8::Mask8`]: the per-lane predicate used for loads and stores
//! - [`fma::Avx2Fma`]: the [`FmaKernel`](crate::simd::traits::FmaKernel) built on them

pub mod f32x8;

pub mod fma;

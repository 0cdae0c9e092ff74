//! # Example
//!
//! ```
//! use slicecmp::x86::{avx2_compare, sse2_compare};
//!
//! let left = [7u8; 300];
//! let right = left;
//!
//! if is_x86_feature_detected!("sse2") {
//!     assert!(unsafe { sse2_compare(Some(&left), Some(&right)) });
//! }
//!
//! if is_x86_feature_detected!("avx2") {
//!     assert!(unsafe { avx2_compare(Some(&left), Some(&right)) });
//! }
//! ```

#![allow(clippy::missing_safety_doc)]

use crate::{
    preamble::{preamble, Preamble},
    vector::{unrolled_eq, Vector},
};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

impl Vector for __m128i {
    const LANES: usize = 16;
    const ALL_EQUAL: u32 = 0xFFFF;
    type Mask = Self;

    #[inline]
    #[target_feature(enable = "sse2")]
    unsafe fn load(a: *const u8) -> Self {
        _mm_loadu_si128(a as *const Self)
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    unsafe fn lanes_eq(a: Self, b: Self) -> Self {
        _mm_cmpeq_epi8(a, b)
    }

    #[inline]
    #[target_feature(enable = "sse2")]
    unsafe fn to_bitmask(a: Self) -> u32 {
        _mm_movemask_epi8(a) as u32
    }
}

impl Vector for __m256i {
    const LANES: usize = 32;
    const ALL_EQUAL: u32 = u32::MAX;
    type Mask = Self;

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn load(a: *const u8) -> Self {
        _mm256_loadu_si256(a as *const Self)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn lanes_eq(a: Self, b: Self) -> Self {
        _mm256_cmpeq_epi8(a, b)
    }

    #[inline]
    #[target_feature(enable = "avx2")]
    unsafe fn to_bitmask(a: Self) -> u32 {
        _mm256_movemask_epi8(a) as u32
    }
}

/// Compares `a` and `b` using 128-bit SSE2 lanes, 64 bytes per iteration.
///
/// The lanes are loaded unaligned and compared with `_mm_cmpeq_epi8`; a lane
/// is accepted only when `_mm_movemask_epi8` reports all sixteen bytes as
/// equal. Fewer than 64 trailing bytes are compared byte by byte.
///
/// Callers must make sure SSE2 is available, for instance through
/// [`Kernel::NarrowVector`](crate::Kernel::NarrowVector).
#[target_feature(enable = "sse2")]
pub unsafe fn sse2_compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match preamble(a, b) {
        Preamble::Decided(verdict) => verdict,
        Preamble::Inspect(left, right) => unrolled_eq::<__m128i>(left, right),
    }
}

/// Compares `a` and `b` using 256-bit AVX2 lanes, 128 bytes per iteration.
///
/// Same structure as [`sse2_compare`] with lanes twice as wide. Fewer than
/// 128 trailing bytes are compared byte by byte.
///
/// Callers must make sure AVX2 is available, for instance through
/// [`Kernel::WideVector`](crate::Kernel::WideVector).
#[target_feature(enable = "avx2")]
pub unsafe fn avx2_compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match preamble(a, b) {
        Preamble::Decided(verdict) => verdict,
        Preamble::Inspect(left, right) => unrolled_eq::<__m256i>(left, right),
    }
}

#![allow(clippy::missing_safety_doc)]

use crate::{
    preamble::{preamble, Preamble},
    vector::{unrolled_eq, Vector},
};
use std::arch::wasm32::*;

impl Vector for v128 {
    const LANES: usize = 16;
    const ALL_EQUAL: u32 = 0xFFFF;
    type Mask = Self;

    #[inline]
    #[target_feature(enable = "simd128")]
    unsafe fn load(a: *const u8) -> Self {
        std::ptr::read_unaligned(a as *const v128)
    }

    #[inline]
    #[target_feature(enable = "simd128")]
    unsafe fn lanes_eq(a: Self, b: Self) -> Self {
        u8x16_eq(a, b)
    }

    #[inline]
    #[target_feature(enable = "simd128")]
    unsafe fn to_bitmask(a: Self) -> u32 {
        u8x16_bitmask(a).into()
    }
}

/// Compares `a` and `b` using 128-bit SIMD128 lanes, 64 bytes per
/// iteration. Fewer than 64 trailing bytes are compared byte by byte.
///
/// WebAssembly has no runtime feature detection, so this is only reachable
/// when the module is built with `simd128` enabled.
#[target_feature(enable = "simd128")]
pub unsafe fn simd128_compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match preamble(a, b) {
        Preamble::Decided(verdict) => verdict,
        Preamble::Inspect(left, right) => unrolled_eq::<v128>(left, right),
    }
}

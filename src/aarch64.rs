#![allow(clippy::missing_safety_doc)]

use crate::{
    preamble::{preamble, Preamble},
    vector::{unrolled_eq, Vector},
};
use std::arch::aarch64::*;

static MD: [u8; 16] = [
    1 << 0,
    1 << 1,
    1 << 2,
    1 << 3,
    1 << 4,
    1 << 5,
    1 << 6,
    1 << 7,
    1 << 0,
    1 << 1,
    1 << 2,
    1 << 3,
    1 << 4,
    1 << 5,
    1 << 6,
    1 << 7,
];

impl Vector for uint8x16_t {
    const LANES: usize = 16;
    const ALL_EQUAL: u32 = 0xFFFF;
    type Mask = Self;

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn load(a: *const u8) -> Self {
        vld1q_u8(a)
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn lanes_eq(a: Self, b: Self) -> Self {
        vceqq_u8(a, b)
    }

    #[inline]
    #[target_feature(enable = "neon")]
    unsafe fn to_bitmask(a: Self) -> u32 {
        let extended = vreinterpretq_u8_s8(vshrq_n_s8(vreinterpretq_s8_u8(a), 7));
        let masked = vandq_u8(vld1q_u8(MD.as_ptr()), extended);
        let maskedhi = vextq_u8(masked, masked, 8);
        vaddvq_u16(vreinterpretq_u16_u8(vzip1q_u8(masked, maskedhi))).into()
    }
}

/// Compares `a` and `b` using 128-bit NEON lanes, 64 bytes per iteration.
/// Fewer than 64 trailing bytes are compared byte by byte.
///
/// Callers must make sure NEON is available, for instance through
/// [`Kernel::NarrowVector`](crate::Kernel::NarrowVector).
#[target_feature(enable = "neon")]
pub unsafe fn neon_compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match preamble(a, b) {
        Preamble::Decided(verdict) => verdict,
        Preamble::Inspect(left, right) => unrolled_eq::<uint8x16_t>(left, right),
    }
}

#[cfg(test)]
mod tests {
    use super::{neon_compare, Vector};
    use std::arch::aarch64::uint8x16_t;

    #[test]
    fn bitmask_marks_each_lane() {
        if !std::arch::is_aarch64_feature_detected!("neon") {
            return;
        }

        let left = [1u8; 16];
        for lane in 0..16 {
            let mut right = left;
            right[lane] = 0;
            let mask = unsafe {
                uint8x16_t::to_bitmask(uint8x16_t::lanes_eq(
                    uint8x16_t::load(left.as_ptr()),
                    uint8x16_t::load(right.as_ptr()),
                ))
            };
            assert_eq!(mask, 0xFFFF & !(1 << lane));
        }
    }

    #[test]
    fn compare_around_block() {
        if !std::arch::is_aarch64_feature_detected!("neon") {
            return;
        }

        for len in [0, 1, 15, 16, 17, 63, 64, 65, 127, 128, 129] {
            let left = (0..len).map(|i| i as u8).collect::<Vec<_>>();
            assert!(unsafe { neon_compare(Some(&left), Some(&left.clone())) });

            if len > 0 {
                let mut right = left.clone();
                right[len - 1] ^= 1;
                assert!(!unsafe { neon_compare(Some(&left), Some(&right)) });
            }
        }
    }
}

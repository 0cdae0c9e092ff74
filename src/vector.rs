use crate::scalar;
use seq_macro::seq;

/// Number of lane loads per unrolled iteration.
pub(crate) const UNROLL: usize = 4;

/// Represents an SIMD register type in order to share the unrolled comparison
/// loop between SSE2, AVX2, NEON and SIMD128.
pub(crate) trait Vector: Copy {
    const LANES: usize;
    /// Bitmask returned by `to_bitmask` when every lane compared equal.
    const ALL_EQUAL: u32;
    type Mask;

    unsafe fn load(a: *const u8) -> Self;

    unsafe fn lanes_eq(a: Self, b: Self) -> Self::Mask;

    unsafe fn to_bitmask(a: Self::Mask) -> u32;
}

#[inline(always)]
unsafe fn lane_eq<V: Vector>(left: *const u8, right: *const u8) -> bool {
    V::to_bitmask(V::lanes_eq(V::load(left), V::load(right))) == V::ALL_EQUAL
}

/// Compares `left` and `right` `UNROLL * V::LANES` bytes per iteration and
/// finishes the remainder byte by byte.
///
/// # Safety
///
/// `left` and `right` must have the same length and the target features
/// required by `V` must be available. Lane loads only happen at offsets up to
/// `len - UNROLL * V::LANES`, so they never read past either slice.
#[inline(always)]
pub(crate) unsafe fn unrolled_eq<V: Vector>(left: &[u8], right: &[u8]) -> bool {
    debug_assert_eq!(left.len(), right.len());

    let block = UNROLL * V::LANES;
    let mut offset = 0;

    if let Some(last) = left.len().checked_sub(block) {
        let (left_ptr, right_ptr) = (left.as_ptr(), right.as_ptr());

        while offset <= last {
            seq!(N in 0..4 {
                if !lane_eq::<V>(
                    left_ptr.add(offset + N * V::LANES),
                    right_ptr.add(offset + N * V::LANES),
                ) {
                    return false;
                }
            });

            offset += block;
        }
    }

    scalar::bytes_eq(&left[offset..], &right[offset..])
}

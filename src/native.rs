use crate::preamble::{preamble, Preamble};

/// Compares `a` and `b` with the C library's `memcmp`.
///
/// The verdict is whatever `memcmp` reports: zero means equal, anything else
/// means different. Only offered where a C library is linked.
///
/// ```
/// use slicecmp::native;
///
/// assert!(native::compare(Some(b"memcmp"), Some(b"memcmp")));
/// assert!(!native::compare(Some(b"memcmp"), Some(b"memcpy")));
/// ```
pub fn compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match preamble(a, b) {
        Preamble::Decided(verdict) => verdict,
        Preamble::Inspect(left, right) => memcmp(left, right) == 0,
    }
}

#[inline]
fn memcmp(left: &[u8], right: &[u8]) -> libc::c_int {
    debug_assert_eq!(left.len(), right.len());

    // Both pointers come from live slices of `left.len()` readable bytes and
    // `memcmp` never writes through them.
    unsafe {
        libc::memcmp(
            left.as_ptr().cast::<libc::c_void>(),
            right.as_ptr().cast::<libc::c_void>(),
            left.len(),
        )
    }
}

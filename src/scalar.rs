use crate::preamble::{preamble, Preamble};

/// Compares `a` and `b` one byte at a time.
///
/// This is the reference kernel: every other kernel in the crate must agree
/// with it on every input.
///
/// ```
/// use slicecmp::scalar;
///
/// assert!(scalar::compare(Some(b"foo"), Some(b"foo")));
/// assert!(!scalar::compare(Some(b"foo"), Some(b"fob")));
/// assert!(scalar::compare(None, None));
/// ```
pub fn compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match preamble(a, b) {
        Preamble::Decided(verdict) => verdict,
        Preamble::Inspect(left, right) => bytes_eq(left, right),
    }
}

/// Byte loop shared as the remainder of every unrolled kernel.
///
/// Callers guarantee `left.len() == right.len()`.
#[inline]
pub(crate) fn bytes_eq(left: &[u8], right: &[u8]) -> bool {
    debug_assert_eq!(left.len(), right.len());

    for (left, right) in left.iter().zip(right) {
        if left != right {
            return false;
        }
    }

    true
}

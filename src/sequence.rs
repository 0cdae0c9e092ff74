use crate::preamble::{preamble, Preamble};

/// Compares `a` and `b` with the standard library's slice equality.
///
/// Serves as the built-in baseline next to the hand-written kernels.
pub fn compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match preamble(a, b) {
        Preamble::Decided(verdict) => verdict,
        Preamble::Inspect(left, right) => left == right,
    }
}

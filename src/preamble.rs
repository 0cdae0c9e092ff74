/// Outcome of the checks every byte kernel runs before looking at content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Preamble<'a> {
    /// The verdict is known without reading a single byte.
    Decided(bool),
    /// Both slices are present, distinct and of equal length.
    Inspect(&'a [u8], &'a [u8]),
}

/// Settles identity, absence and length before any content is read.
///
/// The order matters: identity first, then one-sided absence, then double
/// absence and finally the length check. Only `Inspect` ever reaches a
/// kernel's content loop, so kernels can rely on equal lengths.
#[inline(always)]
pub(crate) fn preamble<'a>(a: Option<&'a [u8]>, b: Option<&'a [u8]>) -> Preamble<'a> {
    match (a, b) {
        (Some(left), Some(right)) if std::ptr::eq(left, right) => Preamble::Decided(true),
        (Some(_), None) | (None, Some(_)) => Preamble::Decided(false),
        (None, None) => Preamble::Decided(true),
        (Some(left), Some(right)) if left.len() != right.len() => Preamble::Decided(false),
        (Some(left), Some(right)) => Preamble::Inspect(left, right),
    }
}

#[cfg(test)]
mod tests {
    use super::{preamble, Preamble};

    #[test]
    fn both_absent() {
        assert_eq!(preamble(None, None), Preamble::Decided(true));
    }

    #[test]
    fn one_absent() {
        assert_eq!(preamble(Some(&b"foo"[..]), None), Preamble::Decided(false));
        assert_eq!(preamble(None, Some(&b"foo"[..])), Preamble::Decided(false));
        assert_eq!(preamble(Some(&b""[..]), None), Preamble::Decided(false));
    }

    #[test]
    fn same_storage() {
        let bytes = [1u8, 2, 3];
        assert_eq!(preamble(Some(&bytes[..]), Some(&bytes[..])), Preamble::Decided(true));
    }

    #[test]
    fn overlapping_storage_of_different_length() {
        let bytes = [1u8, 2, 3];
        assert_eq!(
            preamble(Some(&bytes[..2]), Some(&bytes[..])),
            Preamble::Decided(false)
        );
    }

    #[test]
    fn different_length() {
        assert_eq!(preamble(Some(&b"foo"[..]), Some(&b"fo"[..])), Preamble::Decided(false));
    }

    #[test]
    fn same_length() {
        let left = vec![1u8, 2, 3];
        let right = vec![1u8, 2, 4];
        assert_eq!(
            preamble(Some(&left[..]), Some(&right[..])),
            Preamble::Inspect(&left[..], &right[..])
        );
    }
}

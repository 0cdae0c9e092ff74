//! Equality over slices of any element type with `PartialEq`.
//!
//! Element types that can be absent are written as `Option<U>`. Their
//! equality already follows the expected rule: two present elements are
//! equal when `U` says so, two absent elements are equal, and a present
//! element never equals an absent one.
//!
//! # Example
//!
//! ```
//! use slicecmp::generic::{compare_elements, elements_eq};
//!
//! let left = [Some("foo"), None, Some("bar")];
//! let right = [Some("foo"), None, Some("baz")];
//!
//! assert!(compare_elements(&left, &right, 2));
//! assert!(!elements_eq(&left, &right));
//! ```

use seq_macro::seq;

/// Compares the first `length` elements of `first` and `second`.
///
/// Returns `true` straight away when both regions start at the same element,
/// without calling `PartialEq`. Returns `false` if either slice holds fewer
/// than `length` elements.
pub fn compare_elements<T: PartialEq>(first: &[T], second: &[T], length: usize) -> bool {
    let (Some(first), Some(second)) = (first.get(..length), second.get(..length)) else {
        return false;
    };

    if std::ptr::eq(first.as_ptr(), second.as_ptr()) {
        return true;
    }

    unrolled_eq(first, second)
}

/// Compares `first` and `second` element by element. Slices of different
/// lengths are never equal.
#[inline]
pub fn elements_eq<T: PartialEq>(first: &[T], second: &[T]) -> bool {
    first.len() == second.len() && compare_elements(first, second, first.len())
}

/// Groups of eight, then one group of four, then single elements.
#[inline]
fn unrolled_eq<T: PartialEq>(first: &[T], second: &[T]) -> bool {
    debug_assert_eq!(first.len(), second.len());

    let mut first_octets = first.chunks_exact(8);
    let mut second_octets = second.chunks_exact(8);

    for (left, right) in first_octets.by_ref().zip(second_octets.by_ref()) {
        seq!(N in 0..8 {
            if left[N] != right[N] {
                return false;
            }
        });
    }

    let mut first = first_octets.remainder();
    let mut second = second_octets.remainder();

    if first.len() >= 4 {
        seq!(N in 0..4 {
            if first[N] != second[N] {
                return false;
            }
        });

        first = &first[4..];
        second = &second[4..];
    }

    for (left, right) in first.iter().zip(second) {
        if left != right {
            return false;
        }
    }

    true
}

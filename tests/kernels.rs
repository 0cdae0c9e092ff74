use proptest::prelude::*;
use slicecmp::{generic, scalar, Kernel};

const BOUNDARIES: [usize; 14] = [0, 1, 7, 8, 9, 31, 32, 33, 63, 64, 65, 127, 128, 129];

/// Runs every kernel available on this host in both argument orders and
/// checks they agree with the scalar kernel.
fn compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    let expected = scalar::compare(a, b);

    for kernel in Kernel::available() {
        assert_eq!(kernel.compare(a, b), Ok(expected), "{} kernel", kernel);
        assert_eq!(kernel.compare(b, a), Ok(expected), "{} kernel, swapped", kernel);
    }

    if let (Some(a), Some(b)) = (a, b) {
        assert_eq!(generic::elements_eq(a, b), expected, "generic kernel");
    }

    expected
}

fn range(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

#[test]
fn compare_both_absent() {
    assert!(compare(None, None));
}

#[test]
fn compare_equal_4096() {
    assert!(compare(Some(&range(4096)), Some(&range(4096))));
}

#[test]
fn compare_length_43_against_42() {
    assert!(!compare(Some(&range(43)), Some(&range(42))));
}

#[test]
fn compare_present_against_absent() {
    assert!(!compare(Some(&range(43)), None));
    assert!(!compare(None, Some(&range(43))));
    assert!(!compare(Some(&[]), None));
}

#[test]
fn compare_single_mismatch_at_1248() {
    let left = range(4096);
    let mut right = range(4096);
    right[1248] = 0;
    assert!(!compare(Some(&left), Some(&right)));
}

#[test]
fn compare_mismatch_after_index_20() {
    let left = range(43);
    let right = (0..43)
        .map(|i| if i > 20 { 5 } else { i as u8 })
        .collect::<Vec<_>>();
    assert!(!compare(Some(&left), Some(&right)));
}

#[test]
fn compare_equal_43() {
    assert!(compare(Some(&range(43)), Some(&range(43))));
}

#[test]
fn compare_boundaries() {
    for len in BOUNDARIES {
        let left = range(len);
        assert!(compare(Some(&left), Some(&left.clone())), "len {}", len);

        if len > 0 {
            let mut right = left.clone();
            right[len - 1] = right[len - 1].wrapping_add(1);
            assert!(!compare(Some(&left), Some(&right)), "len {}", len);
        }
    }
}

#[test]
fn compare_every_position_around_boundaries() {
    for len in BOUNDARIES {
        let left = range(len);
        for position in 0..len {
            let mut right = left.clone();
            right[position] ^= 0xFF;
            assert!(
                !compare(Some(&left), Some(&right)),
                "len {} position {}",
                len,
                position
            );
        }
    }
}

#[test]
fn compare_same_storage() {
    let bytes = range(300);
    for len in BOUNDARIES {
        assert!(compare(Some(&bytes[..len]), Some(&bytes[..len])));
    }
}

#[test]
fn compare_shared_prefix_of_different_length() {
    let bytes = range(300);
    for len in BOUNDARIES {
        assert!(!compare(Some(&bytes[..len]), Some(&bytes[..len + 1])));
    }
}

#[test]
fn compare_last_byte_of_large_buffer() {
    let mut left = range(4_096_000);
    let mut right = left.clone();
    assert!(compare(Some(&left), Some(&right)));

    left[4_095_999] = 1;
    right[4_095_999] = 2;
    assert!(!compare(Some(&left), Some(&right)));
}

proptest! {
    #[test]
    fn kernels_agree_on_arbitrary_input(
        left in proptest::collection::vec(any::<u8>(), 0..300),
        right in proptest::collection::vec(any::<u8>(), 0..300),
    ) {
        prop_assert_eq!(compare(Some(&left), Some(&right)), left == right);
    }

    #[test]
    fn kernels_find_any_single_mismatch(
        bytes in proptest::collection::vec(any::<u8>(), 1..600),
        position in any::<prop::sample::Index>(),
        flip in 1..=u8::MAX,
    ) {
        let mut other = bytes.clone();
        let position = position.index(bytes.len());
        other[position] ^= flip;

        prop_assert!(compare(Some(&bytes), Some(&bytes.clone())));
        prop_assert!(!compare(Some(&bytes), Some(&other)));
    }

    #[test]
    fn kernels_reject_different_lengths(
        bytes in proptest::collection::vec(any::<u8>(), 1..300),
        cut in any::<prop::sample::Index>(),
    ) {
        let cut = cut.index(bytes.len());
        prop_assert!(!compare(Some(&bytes[..cut]), Some(&bytes)));
    }
}

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slicecmp::{generic, scalar, Kernel};

#[derive(Arbitrary, Debug)]
struct FuzzInput<'a> {
    left: Option<&'a [u8]>,
    right: Option<&'a [u8]>,
    flip: Option<(usize, u8)>,
}

fuzz_target!(|input: FuzzInput<'_>| {
    let expected = match (input.left, input.right) {
        (Some(left), Some(right)) => left == right,
        (None, None) => true,
        _ => false,
    };
    assert_eq!(scalar::compare(input.left, input.right), expected);

    for kernel in Kernel::available() {
        assert_eq!(kernel.compare(input.left, input.right), Ok(expected));
    }

    // Also exercise a copy of `left` that differs in exactly one byte.
    if let (Some(left), Some((position, flip))) = (input.left, input.flip) {
        if left.is_empty() || flip == 0 {
            return;
        }

        let mut other = left.to_vec();
        other[position % left.len()] ^= flip;

        for kernel in Kernel::available() {
            assert_eq!(kernel.compare(Some(left), Some(&other)), Ok(false));
            assert_eq!(kernel.compare(Some(left), Some(&left.to_vec())), Ok(true));
        }
        assert!(!generic::elements_eq(left, &other));
    }
});

use seq_macro::seq;

/// Number of bytes in a machine word.
pub(crate) const WORD: usize = 8;

/// Number of words compared per unrolled block.
pub(crate) const WORDS_PER_BLOCK: usize = 4;

#[inline(always)]
unsafe fn load_word(bytes: &[u8], offset: usize) -> u64 {
    debug_assert!(offset + WORD <= bytes.len());
    bytes.as_ptr().add(offset).cast::<u64>().read_unaligned()
}

/// Compares the first thirty-two bytes of `left` and `right` as four words,
/// stopping at the first word that differs.
///
/// # Safety
///
/// Both slices must hold at least thirty-two bytes.
#[inline(always)]
pub(crate) unsafe fn memcmp32(left: &[u8], right: &[u8]) -> bool {
    seq!(N in 0..4 {
        if load_word(left, N * WORD) != load_word(right, N * WORD) {
            return false;
        }
    });

    true
}

#[cfg(test)]
mod tests {
    use super::memcmp32;

    #[test]
    fn block_same() {
        assert!(unsafe { memcmp32(b"abcdefghijklmnopqrstuvwxyz012345", b"abcdefghijklmnopqrstuvwxyz012345") });
    }

    #[test]
    fn block_ignores_trailing_bytes() {
        let mut right = [1u8; 33];
        right[32] = 2;
        assert!(unsafe { memcmp32(&[1; 33], &right) });
    }

    #[test]
    fn block_each_word() {
        let left = [7u8; 32];
        assert!(unsafe { memcmp32(&left, &left.clone()) });

        for word in 0..4 {
            let mut right = left;
            right[word * 8 + 3] = 0;
            assert!(!unsafe { memcmp32(&left, &right) });
        }
    }

    #[test]
    fn block_unaligned() {
        let bytes = (0..=40).collect::<Vec<u8>>();
        let copy = bytes.clone();
        assert!(unsafe { memcmp32(&bytes[1..33], &copy[1..33]) });
        assert!(!unsafe { memcmp32(&bytes[1..33], &copy[2..34]) });
    }
}

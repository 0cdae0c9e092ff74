use crate::{
    memcmp::{memcmp32, WORD, WORDS_PER_BLOCK},
    preamble::{preamble, Preamble},
    scalar,
};

const BLOCK: usize = WORD * WORDS_PER_BLOCK;

/// Compares `a` and `b` eight bytes at a time, four words per iteration.
///
/// Whatever is left after the last full 32-byte block, between zero and
/// thirty-one bytes, is compared byte by byte.
///
/// ```
/// use slicecmp::word;
///
/// let left = [42u8; 100];
/// let mut right = left;
/// assert!(word::compare(Some(&left), Some(&right)));
///
/// right[99] = 0;
/// assert!(!word::compare(Some(&left), Some(&right)));
/// ```
pub fn compare(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match preamble(a, b) {
        Preamble::Decided(verdict) => verdict,
        Preamble::Inspect(left, right) => blocks_eq(left, right),
    }
}

#[multiversion::multiversion]
#[clone(target = "[x86|x86_64]+avx2")]
fn blocks_eq(left: &[u8], right: &[u8]) -> bool {
    let left_blocks = left.chunks_exact(BLOCK);
    let right_blocks = right.chunks_exact(BLOCK);
    let (left_tail, right_tail) = (left_blocks.remainder(), right_blocks.remainder());

    for (left, right) in left_blocks.zip(right_blocks) {
        // Safe because `chunks_exact` only yields full blocks.
        if !unsafe { memcmp32(left, right) } {
            return false;
        }
    }

    scalar::bytes_eq(left_tail, right_tail)
}

//! Unchecked bit addressing over a slice of 64-bit words.
//!
//! Callers are responsible for bounds: every index passed here must lie
//! inside `words.len() * 64`.

pub(crate) const WORD_BITS: usize = u64::BITS as usize;

/// Splits an absolute bit index into `(word index, bit within word)`.
#[inline(always)]
pub(crate) const fn locate(index: usize) -> (usize, usize) {
    (index / WORD_BITS, index % WORD_BITS)
}

#[inline(always)]
pub(crate) fn get_bit(words: &[u64], index: usize) -> bool {
    let (word, bit) = locate(index);
    (words[word] >> bit) & 1 == 1
}

#[inline(always)]
pub(crate) fn set_bit(words: &mut [u64], index: usize, value: bool) {
    let (word, bit) = locate(index);
    // 64-bit mask: a narrow literal would break for bit >= 32
    let mask = 1u64 << bit;
    if value {
        words[word] |= mask;
    } else {
        words[word] &= !mask;
    }
}

/// Number of words needed to hold `bits` bits.
#[inline]
pub(crate) const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

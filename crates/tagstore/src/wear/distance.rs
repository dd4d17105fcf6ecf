//! Pair distance metric over the encode window.
//!
//! This module implements the write-cost estimate used by victim selection.
//! It provides:
//! 1. **Window Packing:** Folding the first 8 payload bytes into a 64-bit word.
//! 2. **Distance:** Counting bit-pairs whose representative bit differs.

use crate::common::{PAIR_WIDTH, PAYLOAD_BYTES};

/// Mask selecting the representative (higher) bit of each 2-bit pair.
const REPRESENTATIVE_MASK: u64 = 0xAAAA_AAAA_AAAA_AAAA;

/// Packs the first 8 bytes of `bytes` into a 64-bit word, byte 0 least
/// significant.
///
/// Callers are expected to have validated the payload length; shorter
/// slices zero-fill the high bytes in release builds.
#[inline]
pub fn pack_word(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() >= PAYLOAD_BYTES);
    let mut word = 0u64;
    for (i, &byte) in bytes.iter().take(PAYLOAD_BYTES).enumerate() {
        word |= u64::from(byte) << (8 * i);
    }
    word
}

/// Returns the number of bit-pairs whose representative bit differs
/// between `a` and `b`.
///
/// Only the higher bit of each of the 32 pairs participates; the lower bit
/// carries cell-level state that does not cost a write by itself. The result
/// is symmetric and lies in `[0, 32]`.
#[inline]
pub const fn pair_distance(a: u64, b: u64) -> u32 {
    ((a ^ b) & REPRESENTATIVE_MASK).count_ones()
}

/// Returns the representative bit of the pair at `pair_index` in `word`.
#[inline]
pub const fn representative_bit(word: u64, pair_index: usize) -> bool {
    (word >> (pair_index * PAIR_WIDTH)) & 0b10 != 0
}

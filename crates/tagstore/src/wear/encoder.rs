//! Transition encoding over a victim line.
//!
//! This module applies the per-pair inversion tracking that runs after every
//! victim selection. It provides:
//! 1. **Transition Detection:** Comparing the incoming representative bit of
//!    each pair against the victim's stored bit under its polarity flag.
//! 2. **Classification:** Feeding every detected transition to the
//!    [`TransitionHistogram`](crate::wear::histogram::TransitionHistogram).
//! 3. **Encode Output:** Producing the word the line would physically store,
//!    kept on the block for later comparisons.

use crate::common::{PAIR_WIDTH, PAYLOAD_BYTES};
use crate::store::Block;
use crate::wear::distance::representative_bit;
use crate::wear::histogram::TransitionHistogram;

/// Encodes `incoming` against the victim block's stored state.
///
/// For each of the 32 pairs, a transition is detected when the stored
/// representative bit, viewed through the pair's polarity flag, differs from
/// the incoming one. Each transition sets the pair's flag (flags are sticky
/// and never cleared here), records the pattern movement in `histogram`, and
/// flips bit `63 - pair_offset` of the output word relative to the incoming
/// value. The finished word replaces the block's pending encode.
///
/// Pairs without a transition leave the flag, the histogram, and the output
/// bit untouched, so re-encoding an unchanged payload is a no-op apart from
/// refreshing the pending word.
pub fn encode_and_classify(block: &mut Block, incoming: u64, histogram: &mut TransitionHistogram) {
    let old_word = block.effective_word();
    let mut encoded = incoming;
    for (pair, flag) in block.polarity_flags.iter_mut().enumerate() {
        let offset = pair * PAIR_WIDTH;
        let old_hi = representative_bit(old_word, pair);
        let new_hi = representative_bit(incoming, pair);
        if (old_hi ^ *flag) != new_hi {
            *flag = true;
            let old_low = (old_word >> offset) & 1 != 0;
            let new_low = (incoming >> offset) & 1 != 0;
            histogram.record(old_hi, old_low, new_low);
            encoded ^= 1u64 << (PAYLOAD_BYTES * 8 - 1 - offset);
        }
    }
    block.pending_encoded = Some(encoded);
}

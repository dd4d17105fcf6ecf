//! Cache block state.
//!
//! This module defines the per-way block record and the handle used to refer
//! to one. It provides:
//! 1. **Logical State:** Tag, validity, and security domain of the resident
//!    line.
//! 2. **Wear State:** Write count, wear counter, polarity flags, and the
//!    pending encoded word, all tied to the physical way rather than the
//!    resident line.

use crate::common::{PAIR_COUNT, PAYLOAD_BYTES, SetIndex, Tag};
use crate::wear::distance::pack_word;

/// Handle identifying one block by its set and way.
///
/// Returned by tag store operations in place of a borrow so callers can hold
/// on to a victim or hit across further store calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockId {
    /// Set the block belongs to.
    pub set: SetIndex,
    /// Way slot within the set.
    pub way: usize,
}

/// One way slot of a set.
///
/// Logical fields (`tag`, `valid`, `secure`, `payload`) describe the line
/// currently resident. Wear fields (`write_count`, `wear_counter`,
/// `polarity_flags`, `pending_encoded`) describe the physical way and
/// survive both refill and invalidation.
#[derive(Clone, Debug)]
pub struct Block {
    /// Tag of the resident line; stale while `valid` is false.
    pub tag: Tag,
    /// Set this block belongs to.
    pub set_index: SetIndex,
    /// Whether a line is resident.
    pub valid: bool,
    /// Security domain of the resident line.
    pub secure: bool,
    /// Encode window of the resident line's payload.
    pub payload: [u8; PAYLOAD_BYTES],
    /// Number of hits this block has absorbed since construction.
    pub write_count: u64,
    /// Consecutive-selection counter bounded by the configured threshold.
    pub wear_counter: u32,
    /// Sticky per-pair inversion markers; set by encoding, never cleared.
    pub polarity_flags: [bool; PAIR_COUNT],
    /// Word the way would physically store, from the last encode pass.
    pub pending_encoded: Option<u64>,
}

impl Block {
    /// Creates an invalid block for the given set with untouched wear state.
    pub const fn new(set_index: SetIndex) -> Self {
        Self {
            tag: Tag(0),
            set_index,
            valid: false,
            secure: false,
            payload: [0; PAYLOAD_BYTES],
            write_count: 0,
            wear_counter: 0,
            polarity_flags: [false; PAIR_COUNT],
            pending_encoded: None,
        }
    }

    /// Returns whether this block holds the line for `tag` in `secure`'s
    /// domain.
    #[inline]
    pub fn matches(&self, tag: Tag, secure: bool) -> bool {
        self.valid && self.tag == tag && self.secure == secure
    }

    /// Fills the block with a new line.
    ///
    /// Wear state is left alone: polarity flags and the pending encode
    /// describe the way's physical history across resident lines.
    pub fn fill(&mut self, tag: Tag, secure: bool, window: [u8; PAYLOAD_BYTES]) {
        self.tag = tag;
        self.valid = true;
        self.secure = secure;
        self.payload = window;
    }

    /// Drops the resident line, keeping wear state.
    pub fn invalidate(&mut self) {
        self.valid = false;
        self.secure = false;
    }

    /// Returns the word victim comparison should see for this way.
    ///
    /// The pending encoded word when one exists, otherwise the literal
    /// payload packed byte 0 least significant.
    #[inline]
    pub fn effective_word(&self) -> u64 {
        self.pending_encoded
            .unwrap_or_else(|| pack_word(&self.payload))
    }
}

//! Global constants for the tag store.
//!
//! This module defines the fixed geometry of the encode window. It includes:
//! 1. **Window Constants:** Width of the per-line region the wear logic tracks.
//! 2. **Pair Constants:** Bit-pair partitioning used by distance and encoding.

/// Width in bytes of the encode window at the start of each line (64 bits).
///
/// Incoming payloads must supply at least this many bytes; distance and
/// transition classification never look past this window.
pub const PAYLOAD_BYTES: usize = 8;

/// Width in bits of one cell pair within the encode window.
pub const PAIR_WIDTH: usize = 2;

/// Number of bit-pairs in the encode window (64 bits / 2).
pub const PAIR_COUNT: usize = 32;

/// Upper bound of the pair distance metric, one mismatch per pair.
pub const MAX_PAIR_DISTANCE: u32 = 32;

//! Transition histogram for offline write-pattern analysis.
//!
//! This module counts pair transitions observed by the encoder. It provides:
//! 1. **Classification:** Eight buckets keyed by the (high, low) pattern a
//!    pair held before the transition and the pattern it moves to.
//! 2. **Reporting:** A printed table in the style of the stats report.
//!
//! A transition always flips the representative (high) bit, so the buckets
//! split by the old pattern and the incoming low bit. Buckets prefixed `ht`
//! land on a uniform pattern (`00` or `11`); buckets prefixed `tt` land on a
//! mixed one (`01` or `10`).

/// Counts of pair transitions by observed pattern movement.
///
/// Counters only grow during encoding; they are cleared solely by an
/// explicit [`reset`](Self::reset).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionHistogram {
    /// Pairs observed moving from pattern `00` to `11`.
    pub ht_00_11: u64,
    /// Pairs observed moving from pattern `01` to `11`.
    pub ht_01_11: u64,
    /// Pairs observed moving from pattern `11` to `00`.
    pub ht_11_00: u64,
    /// Pairs observed moving from pattern `10` to `00`.
    pub ht_10_00: u64,
    /// Pairs observed moving from pattern `00` to `10`.
    pub tt_00_10: u64,
    /// Pairs observed moving from pattern `01` to `10`.
    pub tt_01_10: u64,
    /// Pairs observed moving from pattern `11` to `01`.
    pub tt_11_01: u64,
    /// Pairs observed moving from pattern `10` to `01`.
    pub tt_10_01: u64,
}

impl TransitionHistogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one pair transition.
    ///
    /// `old_hi` and `old_low` are the pair bits the victim line held;
    /// `new_low` is the low bit of the incoming pair. The new high bit is
    /// implied: a recorded transition always inverts `old_hi`.
    pub fn record(&mut self, old_hi: bool, old_low: bool, new_low: bool) {
        match (old_hi, old_low, new_low) {
            (true, true, true) => self.tt_11_01 += 1,
            (true, true, false) => self.ht_11_00 += 1,
            (true, false, true) => self.tt_10_01 += 1,
            (true, false, false) => self.ht_10_00 += 1,
            (false, true, true) => self.ht_01_11 += 1,
            (false, true, false) => self.tt_01_10 += 1,
            (false, false, true) => self.ht_00_11 += 1,
            (false, false, false) => self.tt_00_10 += 1,
        }
    }

    /// Returns the total number of transitions recorded across all buckets.
    pub const fn total(&self) -> u64 {
        self.ht_00_11
            + self.ht_01_11
            + self.ht_11_00
            + self.ht_10_00
            + self.tt_00_10
            + self.tt_01_10
            + self.tt_11_01
            + self.tt_10_01
    }

    /// Clears every bucket.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Prints the histogram table to stdout.
    pub fn print(&self) {
        println!("TRANSITION HISTOGRAM");
        println!("  pair.00_11             {}", self.ht_00_11);
        println!("  pair.01_11             {}", self.ht_01_11);
        println!("  pair.11_00             {}", self.ht_11_00);
        println!("  pair.10_00             {}", self.ht_10_00);
        println!("  pair.00_10             {}", self.tt_00_10);
        println!("  pair.01_10             {}", self.tt_01_10);
        println!("  pair.11_01             {}", self.tt_11_01);
        println!("  pair.10_01             {}", self.tt_10_01);
        println!("  pair.transitions       {}", self.total());
    }
}

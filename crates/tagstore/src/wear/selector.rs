//! Wear-aware victim selection.
//!
//! This module chooses which way a miss should evict. It provides:
//! 1. **Recency Path:** Pure LRU for a level that must not run wear logic.
//! 2. **Strict Pass:** Flip-minimizing choice among ways below the wear
//!    threshold.
//! 3. **Relaxed Pass:** Fallback that drops the wear filter and resets the
//!    counters it scans, so the strict criterion can never starve.

use tracing::debug;

use crate::store::CacheSet;
use crate::wear::distance::pair_distance;
use crate::wear::encoder::encode_and_classify;
use crate::wear::histogram::TransitionHistogram;

/// The eligibility regime that produced a victim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPass {
    /// Tail of the recency order; wear logic bypassed entirely.
    Recency,
    /// Wear filter active: only ways below the threshold competed.
    Strict,
    /// Wear filter dropped after the strict pass found nothing.
    Relaxed,
}

/// Outcome of one victim selection.
#[derive(Clone, Copy, Debug)]
pub struct Selection {
    /// The chosen way.
    pub way: usize,
    /// Which pass chose it.
    pub pass: SelectionPass,
    /// Winning pair distance, absent on the recency path where no distance
    /// is computed.
    pub distance: Option<u32>,
    /// Number of wear counters zeroed, non-zero only for the relaxed pass.
    pub counters_reset: u32,
}

/// Chooses victims for one tag store.
///
/// Holds the wear threshold; all remaining state lives on the set's blocks
/// and in the histogram passed to [`select`](Self::select).
#[derive(Clone, Copy, Debug)]
pub struct VictimSelector {
    threshold: u32,
}

impl VictimSelector {
    /// Creates a selector with the given wear threshold.
    ///
    /// `threshold` must be non-zero;
    /// [`TagStore::new`](crate::store::TagStore::new) validates this before
    /// building one.
    pub const fn new(threshold: u32) -> Self {
        debug_assert!(threshold > 0);
        Self { threshold }
    }

    /// Picks the victim way for an incoming write.
    ///
    /// With `top_level` set the set's tail way is returned untouched. The
    /// wear-aware path otherwise scans in way order: the strict pass admits
    /// ways matching the tail block's validity whose wear counter sits below
    /// the threshold; if none qualify, the relaxed pass re-scans without the
    /// wear filter and zeroes the counter of every way it admits. Among the
    /// admitted ways, the smallest pair distance against the incoming word
    /// wins, first way on ties.
    ///
    /// The winner's wear counter is incremented and the incoming word is
    /// encoded against it, updating `histogram` and the block's pending
    /// encode.
    ///
    /// # Panics
    ///
    /// Panics when no way matches the tail block's validity class. A set
    /// always contains its own tail, so this is unreachable unless block
    /// state is corrupted mid-selection.
    pub fn select(
        &self,
        set: &mut CacheSet,
        incoming: u64,
        top_level: bool,
        histogram: &mut TransitionHistogram,
    ) -> Selection {
        if top_level {
            return Selection {
                way: set.tail_way(),
                pass: SelectionPass::Recency,
                distance: None,
                counters_reset: 0,
            };
        }

        let reference_validity = set.block(set.tail_way()).valid;

        let mut best: Option<(usize, u32)> = None;
        for (way, block) in set.blocks().iter().enumerate() {
            if block.valid == reference_validity && block.wear_counter != self.threshold {
                let distance = pair_distance(block.effective_word(), incoming);
                if best.is_none_or(|(_, min)| distance < min) {
                    best = Some((way, distance));
                }
            }
        }
        let mut pass = SelectionPass::Strict;
        let mut counters_reset = 0;

        if best.is_none() {
            debug!(
                threshold = self.threshold,
                "strict pass exhausted, relaxing wear filter"
            );
            pass = SelectionPass::Relaxed;
            for way in 0..set.ways() {
                let block = set.block_mut(way);
                if block.valid == reference_validity {
                    block.wear_counter = 0;
                    counters_reset += 1;
                    let distance = pair_distance(block.effective_word(), incoming);
                    if best.is_none_or(|(_, min)| distance < min) {
                        best = Some((way, distance));
                    }
                }
            }
        }

        let Some((way, distance)) = best else {
            panic!(
                "victim selection found no way matching validity {reference_validity} in a {}-way set",
                set.ways()
            );
        };

        let victim = set.block_mut(way);
        victim.wear_counter += 1;
        encode_and_classify(victim, incoming, histogram);

        Selection {
            way,
            pass,
            distance: Some(distance),
            counters_reset,
        }
    }
}

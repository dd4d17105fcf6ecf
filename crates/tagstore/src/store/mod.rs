//! Tag store composition.
//!
//! This module wires the per-set containers, the address mapper, and the
//! wear machinery into the public store type. It provides:
//! 1. **Lookup:** Tag-and-domain matching with recency promotion on hit.
//! 2. **Fill and Invalidate:** Line installs and drops with the matching
//!    recency movement.
//! 3. **Victim Selection:** The wear-aware two-pass search, with the pure
//!    recency path for a level that must not run it.
//! 4. **Observation:** Statistics, the transition histogram, and block
//!    inspection by handle.

/// Per-way block state.
pub mod block;

/// Associative set and recency order.
pub mod set;

pub use block::{Block, BlockId};
pub use set::CacheSet;

use tracing::trace;

use crate::common::{Address, AddressMapper, PAYLOAD_BYTES, SetIndex, TagStoreError};
use crate::config::TagStoreConfig;
use crate::request::WriteRequest;
use crate::stats::TagStoreStats;
use crate::wear::histogram::TransitionHistogram;
use crate::wear::selector::{SelectionPass, VictimSelector};

/// A wear-aware set-associative tag store.
///
/// Lookups, fills, and invalidations keep a per-set recency order; misses
/// pick their victim through the two-pass flip-minimizing search and feed
/// the transition histogram. One instance owns all of its state and expects
/// single-threaded use; a concurrent host must serialize operations per set.
#[derive(Clone, Debug)]
pub struct TagStore {
    sets: Vec<CacheSet>,
    mapper: AddressMapper,
    selector: VictimSelector,
    histogram: TransitionHistogram,
    stats: TagStoreStats,
    ways: usize,
}

impl TagStore {
    /// Creates a store from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TagStoreError::ZeroGeometry`] when `sets`, `ways`, or
    /// `line_bytes` is zero, [`TagStoreError::LineTooNarrow`] when the
    /// line cannot hold the encode window, and
    /// [`TagStoreError::ZeroWearThreshold`] when the wear threshold is
    /// zero.
    pub fn new(config: &TagStoreConfig) -> Result<Self, TagStoreError> {
        if config.sets == 0 {
            return Err(TagStoreError::ZeroGeometry { field: "sets" });
        }
        if config.ways == 0 {
            return Err(TagStoreError::ZeroGeometry { field: "ways" });
        }
        if config.line_bytes == 0 {
            return Err(TagStoreError::ZeroGeometry { field: "line_bytes" });
        }
        if config.line_bytes < PAYLOAD_BYTES {
            return Err(TagStoreError::LineTooNarrow {
                line_bytes: config.line_bytes,
            });
        }
        if config.wear_threshold == 0 {
            return Err(TagStoreError::ZeroWearThreshold);
        }

        Ok(Self {
            sets: (0..config.sets)
                .map(|index| CacheSet::new(SetIndex(index), config.ways))
                .collect(),
            mapper: AddressMapper::new(config.line_bytes, config.sets),
            selector: VictimSelector::new(config.wear_threshold),
            histogram: TransitionHistogram::new(),
            stats: TagStoreStats::new(),
            ways: config.ways,
        })
    }

    /// Looks up `addr` in `secure`'s domain.
    ///
    /// On a hit the block's write count grows, the block moves to the head
    /// of its set's recency order, and its handle is returned. A resident
    /// line in the other security domain is a miss.
    ///
    /// # Panics
    ///
    /// This function will not panic: the mapper reduces every address
    /// modulo the set count, so the set index is always in range.
    pub fn access(&mut self, addr: Address, secure: bool) -> Option<BlockId> {
        let set_index = self.mapper.set_index_of(addr);
        let tag = self.mapper.tag_of(addr);
        let set = &mut self.sets[set_index.val()];

        self.stats.accesses += 1;
        let Some(way) = (0..set.ways()).find(|&way| set.block(way).matches(tag, secure)) else {
            self.stats.misses += 1;
            return None;
        };

        self.stats.hits += 1;
        set.block_mut(way).write_count += 1;
        set.move_to_head(way);
        trace!(
            set = set_index.val(),
            addr = self.mapper.rebuild_address(tag, set_index).val(),
            secure,
            "block promoted to recency head"
        );
        Some(BlockId {
            set: set_index,
            way,
        })
    }

    /// Fills the block at `id` with the requested line and promotes it.
    ///
    /// Only the request's encode window lands in the block payload. Wear
    /// state on the way is untouched, so encoding history carries across
    /// resident lines.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a block of this store.
    pub fn insert(&mut self, request: &WriteRequest<'_>, id: BlockId) {
        debug_assert_eq!(self.mapper.set_index_of(request.addr()), id.set);
        let tag = self.mapper.tag_of(request.addr());
        let set = &mut self.sets[id.set.val()];
        set.block_mut(id.way)
            .fill(tag, request.secure(), request.window_bytes());
        set.move_to_head(id.way);
        self.stats.insertions += 1;
    }

    /// Drops the line at `id` and demotes the block to its set's tail.
    ///
    /// The block becomes the first candidate for plain-recency eviction
    /// without waiting out a full LRU cycle. Wear state survives.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a block of this store.
    pub fn invalidate(&mut self, id: BlockId) {
        let set = &mut self.sets[id.set.val()];
        set.block_mut(id.way).invalidate();
        set.move_to_tail(id.way);
        self.stats.invalidations += 1;
    }

    /// Chooses the way the given write should evict.
    ///
    /// With `top_level` set the target set's recency tail is returned and no
    /// wear or encoding state moves. Otherwise the two-pass search runs; the
    /// winner's wear counter grows and the incoming window is encoded
    /// against it, updating the histogram.
    ///
    /// The returned handle refers to the victim as-is. The caller decides
    /// whether to [`invalidate`](Self::invalidate) it, fill it through
    /// [`insert`](Self::insert), or both.
    ///
    /// # Panics
    ///
    /// Panics when no way of the target set matches the tail block's
    /// validity class; see
    /// [`VictimSelector::select`](crate::wear::VictimSelector::select).
    pub fn find_victim(&mut self, request: &WriteRequest<'_>, top_level: bool) -> BlockId {
        let set_index = self.mapper.set_index_of(request.addr());
        let set = &mut self.sets[set_index.val()];
        let selection =
            self.selector
                .select(set, request.window_word(), top_level, &mut self.histogram);

        match selection.pass {
            SelectionPass::Recency => self.stats.victims_recency += 1,
            SelectionPass::Strict => {
                self.stats.victims_strict += 1;
                self.stats.encodes += 1;
            }
            SelectionPass::Relaxed => {
                self.stats.victims_relaxed += 1;
                self.stats.encodes += 1;
                self.stats.wear_resets += u64::from(selection.counters_reset);
            }
        }
        if let Some(distance) = selection.distance {
            self.stats.victim_distance_total += u64::from(distance);
        }

        BlockId {
            set: set_index,
            way: selection.way,
        }
    }

    /// Returns the block behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to a block of this store.
    pub fn block(&self, id: BlockId) -> &Block {
        self.sets[id.set.val()].block(id.way)
    }

    /// Returns the set at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set(&self, index: SetIndex) -> &CacheSet {
        &self.sets[index.val()]
    }

    /// Returns the transition histogram accumulated so far.
    pub const fn histogram(&self) -> &TransitionHistogram {
        &self.histogram
    }

    /// Clears the transition histogram.
    pub fn reset_histogram(&mut self) {
        self.histogram.reset();
    }

    /// Returns the operation counters accumulated so far.
    pub const fn stats(&self) -> &TagStoreStats {
        &self.stats
    }

    /// Returns the number of sets.
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }

    /// Returns the associativity.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Prints the statistics report and the transition histogram to stdout.
    pub fn print_report(&self) {
        self.stats.print();
        self.histogram.print();
        println!("==========================================================");
    }
}

//! One associative set and its recency order.
//!
//! This module implements the per-set container. It provides:
//! 1. **Way Storage:** Blocks live in fixed way slots and never move.
//! 2. **Recency Order:** A circular doubly-linked order over way indices
//!    with O(1) promotion and demotion.
//!
//! Reordering touches only the index links. The block a way slot holds is
//! never copied or swapped by a recency operation.

use crate::common::SetIndex;
use crate::store::block::Block;

/// An associative set: way slots plus their recency order.
///
/// The order is a circular ring over way indices. `head` is the most
/// recently used way and its ring predecessor is the least recently used
/// one, so both ends are reachable in O(1).
#[derive(Clone, Debug)]
pub struct CacheSet {
    blocks: Vec<Block>,
    next: Vec<usize>,
    prev: Vec<usize>,
    head: usize,
}

impl CacheSet {
    /// Creates a set with `ways` invalid blocks.
    ///
    /// The initial order runs way 0 (head) through the last way (tail).
    pub fn new(set_index: SetIndex, ways: usize) -> Self {
        debug_assert!(ways > 0);
        Self {
            blocks: (0..ways).map(|_| Block::new(set_index)).collect(),
            next: (0..ways).map(|way| (way + 1) % ways).collect(),
            prev: (0..ways).map(|way| (way + ways - 1) % ways).collect(),
            head: 0,
        }
    }

    /// Returns the associativity of the set.
    #[inline]
    pub fn ways(&self) -> usize {
        self.blocks.len()
    }

    /// Returns the most recently used way.
    #[inline]
    pub const fn head_way(&self) -> usize {
        self.head
    }

    /// Returns the least recently used way.
    #[inline]
    pub fn tail_way(&self) -> usize {
        self.prev[self.head]
    }

    /// Returns the block in the given way slot.
    ///
    /// # Panics
    ///
    /// Panics if `way` is not a way of this set.
    #[inline]
    pub fn block(&self, way: usize) -> &Block {
        &self.blocks[way]
    }

    /// Returns the block in the given way slot, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `way` is not a way of this set.
    #[inline]
    pub fn block_mut(&mut self, way: usize) -> &mut Block {
        &mut self.blocks[way]
    }

    /// Returns all blocks in way order.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Makes `way` the most recently used way.
    ///
    /// # Panics
    ///
    /// Panics if `way` is not a way of this set.
    pub fn move_to_head(&mut self, way: usize) {
        if way == self.head {
            return;
        }
        if way == self.tail_way() {
            // The ring already ends at `way`; rotating the head suffices.
            self.head = way;
            return;
        }
        self.unlink(way);
        self.link_before(way, self.head);
        self.head = way;
    }

    /// Makes `way` the least recently used way.
    ///
    /// # Panics
    ///
    /// Panics if `way` is not a way of this set.
    pub fn move_to_tail(&mut self, way: usize) {
        if way == self.tail_way() {
            return;
        }
        if way == self.head {
            self.head = self.next[way];
            return;
        }
        self.unlink(way);
        self.link_before(way, self.head);
    }

    /// Returns the ways from most to least recently used.
    ///
    /// Intended for inspection and assertions; the hot paths only ever look
    /// at the ends of the order.
    pub fn recency_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.blocks.len());
        let mut way = self.head;
        for _ in 0..self.blocks.len() {
            order.push(way);
            way = self.next[way];
        }
        order
    }

    fn unlink(&mut self, way: usize) {
        let p = self.prev[way];
        let n = self.next[way];
        self.next[p] = n;
        self.prev[n] = p;
    }

    fn link_before(&mut self, way: usize, anchor: usize) {
        let p = self.prev[anchor];
        self.next[p] = way;
        self.prev[way] = p;
        self.next[way] = anchor;
        self.prev[anchor] = way;
    }
}

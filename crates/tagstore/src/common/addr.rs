//! Address types and set/tag decomposition.
//!
//! This module defines strong types for the address space seen by the tag
//! store so set indices, tags, and raw addresses cannot be mixed up. It
//! provides the following:
//! 1. **Type Safety:** Newtypes for addresses, set indices, and tags.
//! 2. **Decomposition:** Splitting an address into its set index and tag.
//! 3. **Regeneration:** Rebuilding a block's base address from tag and set.

/// A raw address presented to the tag store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address(pub u64);

/// Index of a set within the tag store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetIndex(pub usize);

/// The tag portion of an address, identifying a line within its set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(pub u64);

impl Address {
    /// Creates a new address from a raw 64-bit value.
    #[inline]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline]
    pub const fn val(self) -> u64 {
        self.0
    }
}

impl SetIndex {
    /// Creates a new set index from a raw value.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index value.
    #[inline]
    pub const fn val(self) -> usize {
        self.0
    }
}

impl Tag {
    /// Creates a new tag from a raw value.
    #[inline]
    pub const fn new(tag: u64) -> Self {
        Self(tag)
    }

    /// Returns the raw tag value.
    #[inline]
    pub const fn val(self) -> u64 {
        self.0
    }
}

/// Splits addresses into (set, tag) pairs and rebuilds block addresses.
///
/// The decomposition is line-granular: consecutive lines map to consecutive
/// sets, and the tag is everything above the set index. Geometry is fixed at
/// construction; both dimensions must be non-zero (enforced by the owning
/// store before the mapper is built).
#[derive(Clone, Copy, Debug)]
pub struct AddressMapper {
    line_bytes: u64,
    num_sets: u64,
}

impl AddressMapper {
    /// Creates a mapper for the given line width and set count.
    pub fn new(line_bytes: usize, num_sets: usize) -> Self {
        debug_assert!(line_bytes > 0 && num_sets > 0);
        Self {
            line_bytes: line_bytes as u64,
            num_sets: num_sets as u64,
        }
    }

    /// Returns the set an address maps to.
    #[inline]
    pub fn set_index_of(&self, addr: Address) -> SetIndex {
        SetIndex(((addr.val() / self.line_bytes) % self.num_sets) as usize)
    }

    /// Returns the tag portion of an address.
    #[inline]
    pub fn tag_of(&self, addr: Address) -> Tag {
        Tag(addr.val() / (self.line_bytes * self.num_sets))
    }

    /// Rebuilds the base address of the block identified by `tag` and `set`.
    ///
    /// Inverse of [`set_index_of`](Self::set_index_of) /
    /// [`tag_of`](Self::tag_of) up to the intra-line offset, which is lost
    /// in decomposition and comes back as zero.
    #[inline]
    pub fn rebuild_address(&self, tag: Tag, set: SetIndex) -> Address {
        Address((tag.val() * self.num_sets + set.val() as u64) * self.line_bytes)
    }
}

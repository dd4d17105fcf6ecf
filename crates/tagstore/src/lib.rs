//! Wear-aware set-associative tag store library.
//!
//! This crate implements a cache tag store for memories where writes wear
//! the cells, with the following:
//! 1. **Recency:** Per-set LRU order with O(1) promotion and demotion.
//! 2. **Victim Selection:** A two-pass search that minimizes representative
//!    bit flips while spreading wear across the ways of a set.
//! 3. **Transition Encoding:** Sticky per-pair inversion tracking on every
//!    chosen victim, with an eight-bucket histogram of observed pattern
//!    movements for offline analysis.
//! 4. **Observation:** Operation statistics and block inspection by handle.
//!
//! # Examples
//!
//! Replaying a miss and a hit against a small store:
//!
//! ```
//! use nvtags_core::{Address, TagStore, TagStoreConfig, WriteRequest};
//!
//! # fn main() -> Result<(), nvtags_core::TagStoreError> {
//! let config = TagStoreConfig {
//!     sets: 4,
//!     ways: 2,
//!     ..TagStoreConfig::default()
//! };
//! let mut store = TagStore::new(&config)?;
//!
//! let request = WriteRequest::new(Address(0x40), &[0xFF, 0, 0, 0, 0, 0, 0, 0], false)?;
//! assert!(store.access(request.addr(), request.secure()).is_none());
//!
//! let victim = store.find_victim(&request, false);
//! store.insert(&request, victim);
//! assert!(store.access(request.addr(), request.secure()).is_some());
//! # Ok(())
//! # }
//! ```

/// Common types and constants (addresses, encode window, errors).
pub mod common;
/// Store configuration (defaults and the JSON-deserialized structure).
pub mod config;
/// Write request presented to the store.
pub mod request;
/// Statistics collection and reporting.
pub mod stats;
/// Sets, blocks, and the tag store composition.
pub mod store;
/// Wear tracking: distance, selection, encoding, histogram.
pub mod wear;

/// Address type accepted by store operations.
pub use crate::common::Address;
/// Errors surfaced by construction and request validation.
pub use crate::common::TagStoreError;
/// Root configuration type; use `TagStoreConfig::default()` or deserialize from JSON.
pub use crate::config::TagStoreConfig;
/// Borrowed view of one incoming write.
pub use crate::request::WriteRequest;
/// Operation counters; printed by section.
pub use crate::stats::TagStoreStats;
/// Main store type; construct with `TagStore::new`.
pub use crate::store::TagStore;
/// Handle to one block of a store.
pub use crate::store::BlockId;
/// Transition counts accumulated by encoding.
pub use crate::wear::TransitionHistogram;

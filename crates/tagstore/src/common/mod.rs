//! Common utilities and types used throughout the tag store.
//!
//! This module provides fundamental building blocks that are shared across all
//! components of the crate. It includes:
//! 1. **Address Types:** Strong types for addresses, set indices, and tags.
//! 2. **Constants:** Fixed geometry of the encode window and its bit-pairs.
//! 3. **Error Handling:** Error types for construction and access failures.

/// Address type definitions and set/tag decomposition.
pub mod addr;

/// Encode window constants.
pub mod constants;

/// Error types for construction and access failures.
pub mod error;

pub use addr::{Address, AddressMapper, SetIndex, Tag};
pub use constants::{MAX_PAIR_DISTANCE, PAIR_COUNT, PAIR_WIDTH, PAYLOAD_BYTES};
pub use error::TagStoreError;

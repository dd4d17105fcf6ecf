//! Error definitions for tag store construction and access.
//!
//! This module defines the error handling for the tag store. It provides:
//! 1. **Construction Errors:** Rejecting degenerate cache geometries.
//! 2. **Access Errors:** Rejecting write payloads the encode window cannot cover.
//! 3. **Error Handling:** Integrating with standard Rust error traits for system-level reporting.

use thiserror::Error;

/// Errors reported by the tag store.
///
/// Invariant violations inside the store (recency list corruption, out of
/// range way indices) are programming bugs and panic instead of surfacing
/// here. This enum covers the conditions a caller can actually cause.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TagStoreError {
    /// A geometry field of the configuration was zero.
    ///
    /// Raised at construction when the set count, associativity, or line
    /// width is zero. The associated value names the offending field.
    #[error("cache geometry field `{field}` must be non-zero")]
    ZeroGeometry {
        /// Name of the configuration field that was zero.
        field: &'static str,
    },

    /// The configured wear threshold was zero.
    ///
    /// Raised at construction. The strict victim pass excludes ways whose
    /// wear counter equals the threshold, so a zero threshold would bar
    /// every fresh way and let winning counters run past the bound.
    #[error("wear threshold must be non-zero")]
    ZeroWearThreshold,

    /// The configured line width cannot hold the encode window.
    ///
    /// Raised at construction when `line_bytes` is smaller than the 8-byte
    /// window that distance and transition tracking operate on.
    #[error("line width of {line_bytes} bytes cannot hold the 8-byte encode window")]
    LineTooNarrow {
        /// The configured line width in bytes.
        line_bytes: usize,
    },

    /// A write payload was shorter than the encode window.
    ///
    /// Raised on insertion when the caller supplies fewer than 8 bytes of
    /// data, leaving the distance metric nothing to compare.
    #[error("write payload of {len} bytes does not cover the 8-byte encode window")]
    PayloadTooShort {
        /// Length of the rejected payload in bytes.
        len: usize,
    },
}

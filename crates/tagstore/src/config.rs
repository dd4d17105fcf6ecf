//! Configuration system for the tag store.
//!
//! This module defines the configuration structure used to parameterize the
//! store. It provides:
//! 1. **Defaults:** Baseline geometry (sets, ways, line width) and wear policy.
//! 2. **Structure:** A single flat config deserialized from JSON.
//!
//! Configuration is supplied via JSON (the CLI's `--config` flag) or use
//! `TagStoreConfig::default()` for the built-in geometry.

use serde::Deserialize;

/// Default configuration constants for the tag store.
///
/// These values define the baseline geometry when not explicitly overridden
/// in a JSON configuration file.
mod defaults {
    /// Default number of sets (64 sets, 16 KiB with the default line width
    /// and associativity).
    pub const SETS: usize = 64;

    /// Default associativity (4 ways per set).
    pub const WAYS: usize = 4;

    /// Default line width in bytes (64 bytes).
    ///
    /// Matches typical cache line sizes. Must be at least as wide as the
    /// 8-byte encode window.
    pub const LINE_BYTES: usize = 64;

    /// Default wear threshold.
    ///
    /// A block whose wear counter has reached this value is passed over by
    /// the strict victim pass until a relaxed pass resets the set.
    pub const WEAR_THRESHOLD: u32 = 8;
}

/// Root configuration structure for a tag store.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use nvtags_core::config::TagStoreConfig;
///
/// let config = TagStoreConfig::default();
/// assert_eq!(config.sets, 64);
/// assert_eq!(config.ways, 4);
/// ```
///
/// Deserializing from JSON, with omitted fields taking their defaults:
///
/// ```
/// use nvtags_core::config::TagStoreConfig;
///
/// let json = r#"{
///     "sets": 128,
///     "ways": 8,
///     "wear_threshold": 3
/// }"#;
///
/// let config: TagStoreConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.sets, 128);
/// assert_eq!(config.ways, 8);
/// assert_eq!(config.line_bytes, 64);
/// assert_eq!(config.wear_threshold, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TagStoreConfig {
    /// Number of sets
    #[serde(default = "TagStoreConfig::default_sets")]
    pub sets: usize,

    /// Associativity (number of ways per set)
    #[serde(default = "TagStoreConfig::default_ways")]
    pub ways: usize,

    /// Line width in bytes
    #[serde(default = "TagStoreConfig::default_line_bytes")]
    pub line_bytes: usize,

    /// Wear counter value at which a block becomes ineligible for the
    /// strict victim pass. Must be non-zero.
    #[serde(default = "TagStoreConfig::default_wear_threshold")]
    pub wear_threshold: u32,
}

impl TagStoreConfig {
    /// Returns the default number of sets.
    fn default_sets() -> usize {
        defaults::SETS
    }

    /// Returns the default associativity.
    fn default_ways() -> usize {
        defaults::WAYS
    }

    /// Returns the default line width in bytes.
    fn default_line_bytes() -> usize {
        defaults::LINE_BYTES
    }

    /// Returns the default wear threshold.
    fn default_wear_threshold() -> u32 {
        defaults::WEAR_THRESHOLD
    }
}

impl Default for TagStoreConfig {
    /// Creates a default configuration.
    ///
    /// Geometry and wear policy are set to their default values from the
    /// `defaults` module.
    fn default() -> Self {
        Self {
            sets: defaults::SETS,
            ways: defaults::WAYS,
            line_bytes: defaults::LINE_BYTES,
            wear_threshold: defaults::WEAR_THRESHOLD,
        }
    }
}

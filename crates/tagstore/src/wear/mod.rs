//! Wear tracking and flip-minimizing victim choice.
//!
//! This module groups everything that runs on a miss beyond plain recency.
//! It includes:
//! 1. **Distance:** The pair metric estimating the write cost of an eviction.
//! 2. **Selection:** The two-pass search balancing flips against wear.
//! 3. **Encoding:** Per-pair inversion tracking on the chosen victim.
//! 4. **Histogram:** Transition counts for offline write-pattern analysis.

/// Pair distance metric over the encode window.
pub mod distance;

/// Transition encoding applied to a chosen victim.
pub mod encoder;

/// Transition histogram definitions.
pub mod histogram;

/// Two-pass victim selection.
pub mod selector;

pub use distance::{pack_word, pair_distance};
pub use encoder::encode_and_classify;
pub use histogram::TransitionHistogram;
pub use selector::{Selection, SelectionPass, VictimSelector};

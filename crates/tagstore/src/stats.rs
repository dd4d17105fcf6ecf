//! Statistics collection and reporting for the tag store.
//!
//! This module tracks operation counts for a store instance. It provides:
//! 1. **Access Counts:** Lookups, hits, misses, insertions, invalidations.
//! 2. **Selection Breakdown:** Victims by pass, wear counter resets, encode
//!    passes, and the accumulated winning distance.
//! 3. **Reporting:** Section-based printing; the transition histogram prints
//!    as its own table alongside.

/// Operation counters for one tag store.
///
/// Updated by the store as operations complete; all counters only grow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagStoreStats {
    /// Lookups performed.
    pub accesses: u64,
    /// Lookups that found a matching block.
    pub hits: u64,
    /// Lookups that found none.
    pub misses: u64,
    /// Lines filled into a way.
    pub insertions: u64,
    /// Blocks invalidated.
    pub invalidations: u64,

    /// Victims chosen by the pure recency path.
    pub victims_recency: u64,
    /// Victims chosen by the strict pass.
    pub victims_strict: u64,
    /// Victims chosen by the relaxed pass.
    pub victims_relaxed: u64,
    /// Wear counters zeroed by relaxed passes.
    pub wear_resets: u64,
    /// Encode passes run over a victim.
    pub encodes: u64,
    /// Sum of winning pair distances across wear-aware selections.
    pub victim_distance_total: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"selection"`. Pass an empty
/// slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "selection"];

impl TagStoreStats {
    /// Creates a zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"` or
    /// `"selection"`. Pass an empty slice to print all sections (same as
    /// `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let lookups = if self.accesses == 0 { 1 } else { self.accesses };

        if want("summary") {
            let hit_rate = (self.hits as f64 / lookups as f64) * 100.0;
            println!("\n==========================================================");
            println!("TAG STORE STATISTICS");
            println!("==========================================================");
            println!("store_accesses           {}", self.accesses);
            println!("store_hits               {}", self.hits);
            println!("store_misses             {}", self.misses);
            println!("store_hit_rate           {:.2}%", hit_rate);
            println!("store_insertions         {}", self.insertions);
            println!("store_invalidations      {}", self.invalidations);
            println!("----------------------------------------------------------");
        }
        if want("selection") {
            let wear_aware = self.victims_strict + self.victims_relaxed;
            let victims = if wear_aware == 0 { 1 } else { wear_aware };
            let avg_distance = self.victim_distance_total as f64 / victims as f64;
            println!("VICTIM SELECTION");
            println!("  victims.recency        {}", self.victims_recency);
            println!("  victims.strict         {}", self.victims_strict);
            println!("  victims.relaxed        {}", self.victims_relaxed);
            println!("  victims.avg_distance   {:.2}", avg_distance);
            println!("  wear.resets            {}", self.wear_resets);
            println!("  encode.passes          {}", self.encodes);
            println!("----------------------------------------------------------");
        }
        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

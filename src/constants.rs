//! Cross-cutting, shared constants.
//!
//! # Tunables
//!
//! The gatekeeper has three caller-facing tunables (`min_keep`, `absolute_floor`,
//! `richness_bias`) whose defaults live here, plus two fixed values that are not exposed
//! through [`GatekeeperConfig`](crate::config::GatekeeperConfig):
//!
//! - [`RICHNESS_BAR`]: top score above which a batch counts as "rich". High-confidence
//!   retrievers tend to return tightly clustered top scores, where a purely statistical
//!   knee keeps too much.
//! - [`INITIAL_SPLIT`]: split used when the knee search finds no strictly better candidate.

/// Top score a batch must exceed to be treated as rich (high-signal).
pub const RICHNESS_BAR: f32 = 0.85;

/// Split index the knee search starts from (and falls back to).
pub const INITIAL_SPLIT: usize = 1;

/// Batches at or below this length are kept whole; no split is computed.
pub const TRIVIAL_BATCH_LEN: usize = 2;

/// Split index forced when a rich batch decays too little.
pub const DEFAULT_MIN_KEEP: usize = 1;

/// Top score below which the batch is considered unreliable.
pub const DEFAULT_ABSOLUTE_FLOOR: f32 = 0.30;

/// Decay ratio below which a rich batch's knee is distrusted.
pub const DEFAULT_RICHNESS_BIAS: f32 = 0.20;

/// The knee search is quadratic in batch length. Batches longer than this are still
/// processed, but a warning is logged.
pub const LARGE_BATCH_WARN_LEN: usize = 4096;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_split_is_inside_scan_range() {
        // Smallest batch that gets scanned is TRIVIAL_BATCH_LEN + 1, whose range is 1..=n-2.
        let n = TRIVIAL_BATCH_LEN + 1;
        assert!(INITIAL_SPLIT >= 1 && INITIAL_SPLIT <= n - 2);
    }

    #[test]
    fn test_default_floor_below_richness_bar() {
        assert!(DEFAULT_ABSOLUTE_FLOOR < RICHNESS_BAR);
    }

    #[test]
    fn test_richness_bias_is_a_fraction() {
        assert!((0.0..1.0).contains(&DEFAULT_RICHNESS_BIAS));
    }
}

//! Synthetic cost estimates.
//!
//! The millisecond figures reported next to node counts are not
//! measurements. Each one is a fixed per-node cost plus a small random
//! jitter, rounded to two decimals. They exist to show relative trends
//! between the two algorithms and must never be read as wall-clock data.

use rand::Rng;
use rand::rngs::StdRng;

/// Modeled cost of visiting one node, in milliseconds.
pub const COST_PER_NODE_MS: f64 = 0.15;

/// Jitter amplitude for exhaustive minimax runs.
pub const MINIMAX_JITTER_MS: f64 = 0.2;

/// Jitter amplitude for alpha-beta runs.
pub const ALPHA_BETA_JITTER_MS: f64 = 0.1;

/// Cost estimate for a run that visited `nodes` nodes.
///
/// `jitter_ms` must be positive; the jitter drawn from `rng` lies in
/// `[0, jitter_ms)`, so the estimate never undercuts the base cost.
pub fn estimate_ms(nodes: u64, jitter_ms: f64, rng: &mut StdRng) -> f64 {
    let raw = nodes as f64 * COST_PER_NODE_MS + rng.gen_range(0.0..jitter_ms);
    round2(raw)
}

/// Rounds to the two-decimal precision estimates are reported at.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

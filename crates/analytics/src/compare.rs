//! Side-by-side minimax / alpha-beta comparison runs.

use nim_core::{Algorithm, search_depth, search_root};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::timing::{ALPHA_BETA_JITTER_MS, COST_PER_NODE_MS, MINIMAX_JITTER_MS, estimate_ms};

/// One depth's worth of comparison data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRow {
    pub depth: u8,
    pub minimax_nodes: u64,
    pub alpha_beta_nodes: u64,
    /// Synthetic estimate, see the timing module; 0 on untimed runs
    pub minimax_time_ms: f64,
    pub alpha_beta_time_ms: f64,
}

impl AnalyticsRow {
    /// Snapshot of this row from one algorithm's point of view.
    pub fn stats_for(&self, algorithm: Algorithm) -> SearchStats {
        SearchStats {
            minimax_nodes: self.minimax_nodes,
            alpha_beta_nodes: self.alpha_beta_nodes,
            time_ms: match algorithm {
                Algorithm::Minimax => self.minimax_time_ms,
                Algorithm::AlphaBeta => self.alpha_beta_time_ms,
            },
        }
    }
}

/// Node counts for both algorithms plus the active algorithm's time
/// estimate at the depth a move is chosen at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchStats {
    pub minimax_nodes: u64,
    pub alpha_beta_nodes: u64,
    pub time_ms: f64,
}

/// Runs per-depth comparisons and owns the jitter RNG.
pub struct Analyzer {
    rng: StdRng,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed jitter seed, for tests and reproducible reports.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Compares both algorithms on `pile` at every depth from 1 to
    /// `min(pile, MAX_ANALYTIC_DEPTH)`, ascending. Empty for an empty
    /// pile. Node counts are exact; rows are rebuilt from scratch on
    /// every call.
    pub fn compare(&mut self, pile: u32) -> Vec<AnalyticsRow> {
        self.run(pile, true)
    }

    /// Same comparison with every time estimate forced to 0. Used before
    /// any real move has been analyzed, so the display starts without
    /// made-up timings.
    pub fn compare_untimed(&mut self, pile: u32) -> Vec<AnalyticsRow> {
        self.run(pile, false)
    }

    fn run(&mut self, pile: u32, timed: bool) -> Vec<AnalyticsRow> {
        let max_depth = search_depth(pile);
        let mut rows = Vec::with_capacity(max_depth as usize);
        let mut nodes = 0u64;

        for depth in 1..=max_depth {
            // search_root zeroes the counter, so the two runs stay
            // independent.
            search_root(Algorithm::Minimax, pile, depth, &mut nodes);
            let minimax_nodes = nodes;

            search_root(Algorithm::AlphaBeta, pile, depth, &mut nodes);
            let alpha_beta_nodes = nodes;

            let (minimax_time_ms, alpha_beta_time_ms) = if timed {
                (
                    estimate_ms(minimax_nodes, MINIMAX_JITTER_MS, &mut self.rng),
                    estimate_ms(alpha_beta_nodes, ALPHA_BETA_JITTER_MS, &mut self.rng),
                )
            } else {
                (0.0, 0.0)
            };

            trace!(depth, minimax_nodes, alpha_beta_nodes, "depth compared");
            rows.push(AnalyticsRow {
                depth,
                minimax_nodes,
                alpha_beta_nodes,
                minimax_time_ms,
                alpha_beta_time_ms,
            });
        }

        debug!(pile, rows = rows.len(), "comparison complete");
        rows
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

//! Nim move-selection engine
//!
//! Runs the configured search algorithm over the current pile and picks
//! the move the search recommends, reporting the per-depth comparison
//! stats alongside the raw tree.

use analytics::{Analyzer, AnalyticsRow, SearchStats};
use nim_core::{Algorithm, SearchNode, search_depth, search_root};
use tracing::debug;

/// One full engine look at a pile: the comparison rows, the stats row
/// for the depth the engine plays at, and the search tree itself.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Algorithm the stats and tree were produced with.
    pub algorithm: Algorithm,
    pub rows: Vec<AnalyticsRow>,
    pub stats: SearchStats,
    pub tree: SearchNode,
}

/// A chosen move together with the evidence behind it.
#[derive(Debug, Clone)]
pub struct MoveChoice {
    /// Stones to take, 1..=3, never more than the pile holds
    pub take: u32,
    pub analysis: Analysis,
}

/// Move-selection engine. Holds the active algorithm, the analytics
/// runner, and the node counter for the most recent search.
pub struct NimEngine {
    algorithm: Algorithm,
    analyzer: Analyzer,
    /// Node counter for statistics
    nodes: u64,
}

impl NimEngine {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            analyzer: Analyzer::new(),
            nodes: 0,
        }
    }

    /// Fixed analytics jitter seed, for reproducible runs.
    pub fn with_seed(algorithm: Algorithm, seed: u64) -> Self {
        Self {
            algorithm,
            analyzer: Analyzer::with_seed(seed),
            nodes: 0,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Analyzes a pile without committing to a move: comparison rows,
    /// the stats row at the play depth, and the tree for rendering.
    /// Untimed analysis zeroes the time estimates, for display before
    /// any real move has been examined.
    pub fn analyze(&mut self, stones: u32, timed: bool) -> Analysis {
        let depth = search_depth(stones);
        let rows = if timed {
            self.analyzer.compare(stones)
        } else {
            self.analyzer.compare_untimed(stones)
        };
        let stats = rows
            .iter()
            .find(|row| row.depth == depth)
            .or_else(|| rows.last())
            .map(|row| row.stats_for(self.algorithm))
            .unwrap_or_default();
        let tree = search_root(self.algorithm, stones, depth, &mut self.nodes);

        Analysis {
            algorithm: self.algorithm,
            rows,
            stats,
            tree,
        }
    }

    /// Picks the engine's move for a non-empty pile.
    ///
    /// The root is searched as the minimizing side and the move is the
    /// first non-pruned child with the strictly smallest score, so ties
    /// resolve to the smallest take. A pruned child carries no score and
    /// is never chosen.
    ///
    /// Panics on an empty pile: that position means the game is already
    /// over, and reaching here is a caller bug.
    pub fn choose_move(&mut self, stones: u32) -> MoveChoice {
        assert!(stones > 0, "choose_move on an empty pile");

        let analysis = self.analyze(stones, true);

        let mut take = 1;
        let mut best_score = i32::MAX / 2;
        for (idx, child) in analysis.tree.children.iter().enumerate() {
            if !child.pruned && child.score < best_score {
                best_score = child.score;
                take = idx as u32 + 1;
            }
        }

        debug!(
            stones,
            take,
            nodes = self.nodes,
            algorithm = %self.algorithm,
            "move chosen"
        );
        MoveChoice { take, analysis }
    }
}

#[cfg(test)]
mod lib_tests;

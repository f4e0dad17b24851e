//! Recursive minimax and alpha-beta search over Nim piles.

use std::fmt;

use crate::game;
use crate::node::SearchNode;

/// Depth ceiling for analysis and move selection. Searches are capped at
/// `min(pile, MAX_ANALYTIC_DEPTH)` plies.
pub const MAX_ANALYTIC_DEPTH: u8 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    /// Parses a user-supplied algorithm name.
    pub fn from_name(name: &str) -> Option<Algorithm> {
        match name.to_lowercase().as_str() {
            "minimax" => Some(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" | "ab" => Some(Algorithm::AlphaBeta),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alphabeta"),
        }
    }
}

/// Effective search depth for a pile: the pile size itself, capped at
/// [`MAX_ANALYTIC_DEPTH`].
pub fn search_depth(stones: u32) -> u8 {
    stones.min(MAX_ANALYTIC_DEPTH as u32) as u8
}

/// Runs a search from the root position and returns the finished tree.
///
/// The root always enters as the minimizing side: the mover's own move is
/// evaluated to minimize the opponent's outcome. Analytics, move selection
/// and display refresh all start here, so the root polarity cannot drift
/// between call sites.
///
/// `nodes` is zeroed before the search starts; counts never carry over
/// from a previous invocation.
pub fn search_root(
    algorithm: Algorithm,
    stones: u32,
    target_depth: u8,
    nodes: &mut u64,
) -> SearchNode {
    *nodes = 0;
    search(
        algorithm,
        stones,
        false,
        i32::MIN / 2,
        i32::MAX / 2,
        0,
        target_depth,
        nodes,
    )
}

/// Recursive search returning the subtree rooted at the given position.
///
/// Increments `nodes` exactly once per call, for both algorithms. Pruned
/// placeholder children are synthesized without recursing and do not
/// touch the counter.
///
/// # Arguments
/// * `algorithm` - Minimax expands every child; AlphaBeta stops expanding
///   a node's children once `beta <= alpha`
/// * `stones_left` - stones in the pile at this node
/// * `is_maximizing` - whose turn this node evaluates
/// * `alpha`, `beta` - pruning bounds; root calls pass the half-range
///   sentinels
/// * `depth` - distance from the root (0 at root)
/// * `target_depth` - horizon; nodes at or past it are scored as leaves
/// * `nodes` - visitation counter owned by the caller
pub fn search(
    algorithm: Algorithm,
    stones_left: u32,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    depth: u8,
    target_depth: u8,
    nodes: &mut u64,
) -> SearchNode {
    *nodes += 1;

    let mut node = SearchNode::new(stones_left, is_maximizing, depth);

    // Terminal: pile exhausted (the previous ply took the last stone) or
    // horizon reached. The side to move here has lost.
    if stones_left == 0 || depth >= target_depth {
        node.score = if is_maximizing { -1 } else { 1 };
        return node;
    }

    let mut best = if is_maximizing {
        i32::MIN / 2
    } else {
        i32::MAX / 2
    };
    let mut pruning = false;

    for take in game::legal_takes(stones_left) {
        let left = stones_left - take;

        if pruning && algorithm == Algorithm::AlphaBeta {
            // Cut branch: record the skipped position without recursing.
            node.children
                .push(SearchNode::pruned_placeholder(left, !is_maximizing, depth + 1));
            continue;
        }

        let child = search(
            algorithm,
            left,
            !is_maximizing,
            alpha,
            beta,
            depth + 1,
            target_depth,
            nodes,
        );
        let score = child.score;
        node.children.push(child);

        if is_maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if algorithm == Algorithm::AlphaBeta && beta <= alpha {
            pruning = true; // remaining siblings become placeholders
        }
    }

    node.score = best;
    node
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

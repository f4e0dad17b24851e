//! Search tree nodes.
//!
//! Every position visited during a search becomes one `SearchNode`. The
//! tree is rebuilt from scratch on each search call and is never mutated
//! afterwards; each node exclusively owns its children, so there are no
//! back-references and no sharing between invocations.

/// One node of a search tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Stones left at this position
    pub stones: u32,
    /// Whether this node is the maximizing player's turn
    pub is_maximizing: bool,
    /// Distance from the search root (0 at root)
    pub depth: u8,
    /// Placeholder for a branch skipped by pruning, never expanded
    pub pruned: bool,
    /// Propagated score in {-1, 0, 1}; 0 and meaningless on pruned nodes
    pub score: i32,
    /// One child per legal move, in increasing move-size order
    pub children: Vec<SearchNode>,
}

impl SearchNode {
    /// Fresh unexpanded node; score is filled in by the search.
    pub fn new(stones: u32, is_maximizing: bool, depth: u8) -> Self {
        Self {
            stones,
            is_maximizing,
            depth,
            pruned: false,
            score: 0,
            children: Vec::new(),
        }
    }

    /// Placeholder for a branch cut off by pruning. Carries the position
    /// it stands for but no score and no children.
    pub fn pruned_placeholder(stones: u32, is_maximizing: bool, depth: u8) -> Self {
        Self {
            stones,
            is_maximizing,
            depth,
            pruned: true,
            score: 0,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Nodes in this subtree, placeholders included.
    pub fn total_nodes(&self) -> usize {
        1 + self.children.iter().map(SearchNode::total_nodes).sum::<usize>()
    }

    /// Pruned placeholders in this subtree.
    pub fn pruned_count(&self) -> usize {
        let own = usize::from(self.pruned);
        own + self.children.iter().map(SearchNode::pruned_count).sum::<usize>()
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod node_tests;

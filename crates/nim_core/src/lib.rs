pub mod game;
pub mod node;
pub mod search;

// Re-export core game logic (not presentation-specific)
pub use game::*;
pub use node::SearchNode;
pub use search::{Algorithm, MAX_ANALYTIC_DEPTH, search, search_depth, search_root};

//! Comparative analytics for the Nim search engine
//!
//! This crate provides infrastructure for:
//! - Running minimax and alpha-beta over the same pile at every depth
//! - Deriving synthetic per-depth cost estimates from node counts
//! - Saving, loading and rendering comparison reports
//!
//! # Usage
//!
//! ```bash
//! # Compare both algorithms on the default pile
//! cargo run -p analytics -- compare
//!
//! # Reproducible run on a 9-stone pile, saved as JSON
//! cargo run -p analytics -- compare 9 --seed 42 --save report.json
//! ```

mod compare;
mod report;
mod timing;

pub use compare::*;
pub use report::*;
pub use timing::*;
